pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod print;
pub mod render;
pub mod show;

use anyhow::Context;
use clap::Args;
use cyberdoc_core::{config::Config, CyberTemplate, TemplateSession, ValueMap};
use std::path::{Path, PathBuf};

/// Value sources shared by every command that renders a template. Applied in
/// order: `--prefill`, then `--values`, then each `--set`.
#[derive(Args, Debug, Default, Clone)]
pub struct ValueArgs {
    /// Set one variable (repeatable): --set company_name="ACME Corp"
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// YAML or JSON file mapping variable keys to values
    #[arg(long = "values", value_name = "FILE")]
    pub values_file: Option<PathBuf>,

    /// Start from every variable's example value
    #[arg(long)]
    pub prefill: bool,
}

impl ValueArgs {
    pub fn apply(&self, session: &mut TemplateSession<'_>) -> anyhow::Result<()> {
        if self.prefill {
            session.prefill();
        }
        if let Some(path) = &self.values_file {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let values = ValueMap::from_yaml_str(&data)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            session.apply(&values)?;
        }
        for assignment in &self.set {
            let (key, value) = ValueMap::parse_assignment(assignment)?;
            session.set(&key, value)?;
        }
        Ok(())
    }
}

/// Open a session on `template` with the configured locale and the values
/// from the command line.
pub fn open_session<'a>(
    template: &'a CyberTemplate,
    config: &Config,
    values: &ValueArgs,
) -> anyhow::Result<TemplateSession<'a>> {
    let mut session = TemplateSession::new(template).with_locale(config.locale);
    values
        .apply(&mut session)
        .with_context(|| format!("invalid values for template '{}'", template.id))?;
    Ok(session)
}

/// Warn on stderr about required variables that are still blank. Never fails.
pub fn warn_missing(session: &TemplateSession<'_>) {
    let missing = session.missing_required();
    if missing.is_empty() {
        return;
    }
    tracing::debug!(template = %session.template().id, count = missing.len(), "missing required variables");
    let labels: Vec<String> = missing
        .iter()
        .map(|v| format!("{} ({})", v.key, v.label))
        .collect();
    eprintln!("warning: missing required variables: {}", labels.join(", "));
}

pub fn load_catalog(root: &Path) -> anyhow::Result<cyberdoc_core::Catalog> {
    cyberdoc_core::Catalog::load(root).context("failed to load template catalog")
}

pub fn load_config(root: &Path) -> anyhow::Result<Config> {
    Config::load_or_default(root).context("failed to load config.yaml")
}

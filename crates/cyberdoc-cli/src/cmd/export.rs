use super::ValueArgs;
use crate::output::print_notice;
use crate::platform::SystemExporter;
use anyhow::Context;
use cyberdoc_core::export::{self, CopySource};
use cyberdoc_core::TemplateProvider;
use std::path::{Path, PathBuf};

/// Save the rendered document as `<id>-<title>.md`.
pub fn download(
    root: &Path,
    id: &str,
    out: Option<PathBuf>,
    values: &ValueArgs,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = super::load_catalog(root)?;
    let config = super::load_config(root)?;
    let template = catalog
        .require(id)
        .with_context(|| format!("template '{id}' not found"))?;
    let session = super::open_session(template, &config, values)?;
    super::warn_missing(&session);

    let dir = out.unwrap_or_else(|| config.export_dir(root));
    let mut exporter = SystemExporter::new(dir);
    let notice = export::download(
        &mut exporter,
        template,
        &session.render(),
        config.export.filename_max_len,
    );
    print_notice(&notice, json)
}

/// Put the rendered document, or with `raw` the unrendered template body, on
/// the system clipboard.
pub fn copy(
    root: &Path,
    id: &str,
    raw: bool,
    values: &ValueArgs,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = super::load_catalog(root)?;
    let config = super::load_config(root)?;
    let template = catalog
        .require(id)
        .with_context(|| format!("template '{id}' not found"))?;
    let session = super::open_session(template, &config, values)?;
    let source = if raw {
        CopySource::Raw
    } else {
        super::warn_missing(&session);
        CopySource::Rendered
    };

    let mut exporter = SystemExporter::new(config.export_dir(root));
    let notice = export::copy(&mut exporter, template, &session.render(), source);
    print_notice(&notice, json)
}

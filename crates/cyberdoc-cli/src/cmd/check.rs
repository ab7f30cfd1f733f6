use super::ValueArgs;
use crate::output::print_json;
use anyhow::Context;
use cyberdoc_core::TemplateProvider;
use std::path::Path;

/// Report required variables that are still blank. Advisory: always exits 0.
pub fn run(root: &Path, id: &str, values: &ValueArgs, json: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(root)?;
    let config = super::load_config(root)?;
    let template = catalog
        .require(id)
        .with_context(|| format!("template '{id}' not found"))?;
    let session = super::open_session(template, &config, values)?;
    let missing = session.missing_required();

    if json {
        return print_json(&serde_json::json!({
            "template": template.id,
            "complete": missing.is_empty(),
            "missing": missing,
        }));
    }

    if missing.is_empty() {
        println!("All required variables are filled.");
    } else {
        println!("Missing required variables:");
        for v in missing {
            println!("  {}  {}", v.key, v.label);
        }
    }
    Ok(())
}

use super::ValueArgs;
use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use cyberdoc_core::types::ViewKind;
use cyberdoc_core::TemplateProvider;
use std::path::Path;

pub fn run(
    root: &Path,
    id: &str,
    view: ViewKind,
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

    match (view, json) {
        (ViewKind::Raw, false) => print!("{}", session.raw()),
        (ViewKind::Raw, true) => print_json(&session.raw())?,
        (ViewKind::Visual, false) => print!("{}", session.visual()),
        (ViewKind::Visual, true) => print_json(&session.visual())?,
        (ViewKind::Report, json) => {
            let report = session.report(Utc::now(), config.report_options());
            if json {
                print_json(&report)?;
            } else {
                print!("{report}");
            }
        }
    }
    Ok(())
}

use super::ValueArgs;
use crate::output::print_notice;
use anyhow::Context;
use chrono::Utc;
use cyberdoc_core::export::Notice;
use cyberdoc_core::TemplateProvider;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Write the document report to a temporary file and hand it to the system
/// viewer for printing. The file is removed after `print.teardown_secs`
/// whether or not a viewer could be opened.
pub fn run(root: &Path, id: &str, values: &ValueArgs, json: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(root)?;
    let config = super::load_config(root)?;
    let template = catalog
        .require(id)
        .with_context(|| format!("template '{id}' not found"))?;
    let session = super::open_session(template, &config, values)?;
    super::warn_missing(&session);

    let report = session.report(Utc::now(), config.report_options());
    let delay = Duration::from_secs(config.print.teardown_secs);
    present(
        &template.id,
        &report.to_string(),
        delay,
        |path: &Path| open::that(path),
        |notice| print_notice(notice, json),
    )?;
    Ok(())
}

/// Stage `report` in a temporary file and hand its path to `opener`. The
/// outcome is announced straight away; the file is then kept for `delay`
/// and removed on both branches.
fn present<O, A>(
    id: &str,
    report: &str,
    delay: Duration,
    opener: O,
    announce: A,
) -> anyhow::Result<Notice>
where
    O: FnOnce(&Path) -> std::io::Result<()>,
    A: FnOnce(&Notice) -> anyhow::Result<()>,
{
    let mut file = tempfile::Builder::new()
        .prefix(&format!("cyberdoc-{id}-"))
        .suffix(".txt")
        .tempfile()
        .context("failed to create print file")?;
    file.write_all(report.as_bytes())
        .context("failed to write print file")?;
    file.flush()?;

    let notice = match opener(file.path()) {
        Ok(()) => {
            tracing::info!(template = id, path = %file.path().display(), "opened report for printing");
            Notice::success("Report sent to the system viewer")
        }
        Err(e) => {
            tracing::warn!(template = id, error = %e, "could not open report viewer");
            Notice::failure(format!("Could not open a viewer: {e}"))
        }
    };
    announce(&notice)?;

    std::thread::sleep(delay);
    // Dropping the handle deletes the file.
    drop(file);
    Ok(notice)
}

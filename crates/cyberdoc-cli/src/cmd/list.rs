use crate::output::{print_json, print_table};
use cyberdoc_core::TemplateProvider;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(root)?;
    let templates = catalog.sorted_by_updated();

    if json {
        #[derive(serde::Serialize)]
        struct Row<'a> {
            id: &'a str,
            title: &'a str,
            updated_at: String,
            variables: usize,
            required: usize,
        }
        let rows: Vec<Row> = templates
            .iter()
            .map(|t| Row {
                id: &t.id,
                title: &t.title,
                updated_at: t.updated_at.to_string(),
                variables: t.variables.len(),
                required: t.required_count(),
            })
            .collect();
        return print_json(&rows);
    }

    if catalog.templates().is_empty() {
        println!("No templates.");
        return Ok(());
    }

    let rows = templates
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.title.clone(),
                t.updated_at.to_string(),
                format!("{} ({} required)", t.variables.len(), t.required_count()),
            ]
        })
        .collect();
    print_table(&["ID", "TITLE", "UPDATED", "VARIABLES"], rows);
    Ok(())
}

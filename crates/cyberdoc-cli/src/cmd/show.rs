use crate::output::{print_json, print_table};
use anyhow::Context;
use cyberdoc_core::TemplateProvider;
use std::path::Path;

pub fn run(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(root)?;
    let template = catalog
        .require(id)
        .with_context(|| format!("template '{id}' not found"))?;
    let undeclared = template.undeclared_placeholders();

    if json {
        return print_json(&serde_json::json!({
            "template": template,
            "placeholders": template.placeholders(),
            "undeclared_placeholders": undeclared,
        }));
    }

    println!("{} ({})", template.title, template.id);
    if !template.description.is_empty() {
        println!("{}", template.description);
    }
    println!("Updated: {}", template.updated_at);
    println!();

    let rows = template
        .variables
        .iter()
        .map(|v| {
            vec![
                v.key.clone(),
                v.label.clone(),
                v.kind.to_string(),
                if v.required { "yes" } else { "" }.to_string(),
                v.example.clone(),
            ]
        })
        .collect();
    print_table(&["KEY", "LABEL", "KIND", "REQUIRED", "EXAMPLE"], rows);

    for key in &undeclared {
        eprintln!("warning: placeholder {{{{{key}}}}} has no declared variable");
    }
    Ok(())
}

use anyhow::Context;
use cyberdoc_core::{config::Config, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing cyberdoc in: {}", root.display());

    for p in [paths::cyberdoc_dir(root), paths::templates_dir(root)] {
        std::fs::create_dir_all(&p).with_context(|| format!("failed to create {}", p.display()))?;
    }

    if paths::config_path(root).exists() {
        println!("  exists:  {}", paths::CONFIG_FILE);
    } else {
        Config::default()
            .save(root)
            .context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    }

    println!("  add templates as *.yaml files under {}", paths::TEMPLATES_DIR);
    Ok(())
}

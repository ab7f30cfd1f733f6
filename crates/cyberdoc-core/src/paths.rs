use crate::error::{DocError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CYBERDOC_DIR: &str = ".cyberdoc";
pub const TEMPLATES_DIR: &str = ".cyberdoc/templates";
pub const EXPORTS_DIR: &str = ".cyberdoc/exports";

pub const CONFIG_FILE: &str = ".cyberdoc/config.yaml";

pub const TEMPLATE_EXT: &str = "yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn cyberdoc_dir(root: &Path) -> PathBuf {
    root.join(CYBERDOC_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn templates_dir(root: &Path) -> PathBuf {
    root.join(TEMPLATES_DIR)
}

pub fn exports_dir(root: &Path) -> PathBuf {
    root.join(EXPORTS_DIR)
}

// ---------------------------------------------------------------------------
// Template id validation
// ---------------------------------------------------------------------------

static ID_RE: OnceLock<Regex> = OnceLock::new();

fn id_re() -> &'static Regex {
    ID_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_\-]*$").unwrap())
}

pub fn validate_template_id(id: &str) -> Result<()> {
    if id.is_empty() || id.len() > 64 || !id_re().is_match(id) {
        return Err(DocError::InvalidTemplateId(id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids() {
        for id in ["tpl-X", "incident-report", "a", "soc2_policy-v2"] {
            validate_template_id(id).unwrap_or_else(|_| panic!("expected valid: {id}"));
        }
    }

    #[test]
    fn invalid_ids() {
        for id in ["", "-leading", "has space", "slash/id", "dot.id"] {
            assert!(validate_template_id(id).is_err(), "expected invalid: {id}");
        }
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/proj/.cyberdoc/config.yaml")
        );
        assert_eq!(
            templates_dir(root),
            PathBuf::from("/tmp/proj/.cyberdoc/templates")
        );
    }
}

use crate::error::{DocError, Result};
use crate::paths;
use crate::template::CyberTemplate;
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "incident-report.yaml",
        include_str!("../templates/incident-report.yaml"),
    ),
    (
        "phishing-notice.yaml",
        include_str!("../templates/phishing-notice.yaml"),
    ),
    (
        "access-review.yaml",
        include_str!("../templates/access-review.yaml"),
    ),
];

// ---------------------------------------------------------------------------
// TemplateProvider
// ---------------------------------------------------------------------------

/// Read-only source of templates. Callers receive one explicitly instead of
/// reaching for a global catalog.
pub trait TemplateProvider {
    fn templates(&self) -> &[CyberTemplate];

    fn get(&self, id: &str) -> Option<&CyberTemplate> {
        self.templates().iter().find(|t| t.id == id)
    }

    fn require(&self, id: &str) -> Result<&CyberTemplate> {
        self.get(id)
            .ok_or_else(|| DocError::TemplateNotFound(id.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: Vec<CyberTemplate>,
}

impl TemplateProvider for Catalog {
    fn templates(&self) -> &[CyberTemplate] {
        &self.templates
    }
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and invalid templates.
    pub fn new(templates: Vec<CyberTemplate>) -> Result<Self> {
        let mut seen = HashSet::new();
        for t in &templates {
            t.validate()?;
            if !seen.insert(t.id.as_str()) {
                return Err(DocError::DuplicateTemplate(t.id.clone()));
            }
        }
        Ok(Self { templates })
    }

    /// Templates shipped with the library.
    pub fn builtin() -> Result<Self> {
        let mut templates = Vec::with_capacity(BUILTIN_TEMPLATES.len());
        for (name, data) in BUILTIN_TEMPLATES {
            let t: CyberTemplate = serde_yaml::from_str(data).map_err(|e| {
                tracing::error!(file = *name, error = %e, "built-in template is malformed");
                e
            })?;
            templates.push(t);
        }
        Self::new(templates)
    }

    /// Built-in templates followed by every `*.yaml` file under
    /// `.cyberdoc/templates/`, in file-name order.
    pub fn load(root: &Path) -> Result<Self> {
        let mut templates = Self::builtin()?.templates;
        templates.extend(load_dir(&paths::templates_dir(root))?);
        Self::new(templates)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Newest first; ties ordered by id.
    pub fn sorted_by_updated(&self) -> Vec<&CyberTemplate> {
        let mut out: Vec<&CyberTemplate> = self.templates.iter().collect();
        out.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        out
    }
}

fn load_dir(dir: &Path) -> Result<Vec<CyberTemplate>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension().and_then(|x| x.to_str()) == Some(paths::TEMPLATE_EXT)
        })
        .collect();
    files.sort();

    let mut templates = Vec::with_capacity(files.len());
    for path in files {
        let data = std::fs::read_to_string(&path)?;
        let t: CyberTemplate = serde_yaml::from_str(&data)?;
        tracing::debug!(id = %t.id, path = %path.display(), "loaded template");
        templates.push(t);
    }
    Ok(templates)
}

use crate::error::{DocError, Result};
use crate::types::VariableKind;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// TemplateVariable
// ---------------------------------------------------------------------------

/// A named placeholder slot. `key` appears verbatim inside `{{key}}` markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariable {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub kind: VariableKind,
}

impl TemplateVariable {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            example: String::new(),
            required: false,
            kind: VariableKind::Text,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_kind(mut self, kind: VariableKind) -> Self {
        self.kind = kind;
        self
    }

    /// The canonical marker for this variable, e.g. `{{company_name}}`.
    pub fn marker(&self) -> String {
        format!("{{{{{}}}}}", self.key)
    }
}

// ---------------------------------------------------------------------------
// CyberTemplate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyberTemplate {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub variables: Vec<TemplateVariable>,
    pub content: String,
    pub updated_at: NaiveDate,
}

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

/// Matches `{{ key }}`. Group 1 is the key with surrounding whitespace
/// removed; it may be empty and never contains a brace.
pub(crate) fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").unwrap())
}

/// A key is usable inside a marker when it is non-empty, has no surrounding
/// whitespace and contains no brace.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.trim() == key && !key.contains(['{', '}'])
}

impl CyberTemplate {
    pub fn variable(&self, key: &str) -> Option<&TemplateVariable> {
        self.variables.iter().find(|v| v.key == key)
    }

    pub fn required_count(&self) -> usize {
        self.variables.iter().filter(|v| v.required).count()
    }

    /// Check the invariants a catalog entry must hold: a slug id and unique,
    /// non-empty variable keys.
    pub fn validate(&self) -> Result<()> {
        crate::paths::validate_template_id(&self.id)?;
        let mut seen = HashSet::new();
        for var in &self.variables {
            if !is_valid_key(&var.key) {
                return Err(DocError::InvalidVariableKey {
                    template: self.id.clone(),
                    key: var.key.clone(),
                });
            }
            if !seen.insert(var.key.as_str()) {
                return Err(DocError::DuplicateVariable {
                    template: self.id.clone(),
                    key: var.key.clone(),
                });
            }
        }
        Ok(())
    }

    /// Distinct placeholder keys referenced in `content`, in first-seen order.
    pub fn placeholders(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        placeholder_re()
            .captures_iter(&self.content)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .filter(|k| !k.is_empty() && seen.insert(*k))
            .map(str::to_string)
            .collect()
    }

    /// Placeholder keys in `content` with no declared variable. These can
    /// never be resolved and always render as literal markers.
    pub fn undeclared_placeholders(&self) -> Vec<String> {
        self.placeholders()
            .into_iter()
            .filter(|k| self.variable(k).is_none())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

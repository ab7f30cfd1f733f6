use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// VariableKind
// ---------------------------------------------------------------------------

/// Input affordance hint for a template variable. Values are always stored as
/// plain text regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    #[default]
    Text,
    #[serde(alias = "textarea")]
    Multiline,
    Date,
    Email,
    Url,
    Number,
}

impl VariableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Text => "text",
            VariableKind::Multiline => "multiline",
            VariableKind::Date => "date",
            VariableKind::Email => "email",
            VariableKind::Url => "url",
            VariableKind::Number => "number",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Title of the implicit section that collects lines before the first `##`.
    pub fn default_section_title(self) -> &'static str {
        match self {
            Locale::En => "Summary",
            Locale::Fr => "Résumé",
        }
    }

    /// Highlight text used when a section has nothing displayable.
    pub fn empty_highlight(self) -> &'static str {
        match self {
            Locale::En => "No content",
            Locale::Fr => "Aucun contenu",
        }
    }

    pub fn report_labels(self) -> ReportLabels {
        match self {
            Locale::En => ReportLabels {
                sections: "Sections",
                variables: "Variables",
                required: "Required",
                missing: "Missing",
                highlights: "Highlights",
                generated_at: "Generated at",
            },
            Locale::Fr => ReportLabels {
                sections: "Sections",
                variables: "Variables",
                required: "Obligatoires",
                missing: "Manquantes",
                highlights: "Points clés",
                generated_at: "Généré le",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = crate::error::DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(crate::error::DocError::InvalidLocale(s.to_string())),
        }
    }
}

/// Static labels printed in the document report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLabels {
    pub sections: &'static str,
    pub variables: &'static str,
    pub required: &'static str,
    pub missing: &'static str,
    pub highlights: &'static str,
    pub generated_at: &'static str,
}

// ---------------------------------------------------------------------------
// ViewKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Raw,
    #[default]
    Visual,
    Report,
}

impl ViewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Raw => "raw",
            ViewKind::Visual => "visual",
            ViewKind::Report => "report",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewKind {
    type Err = crate::error::DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(ViewKind::Raw),
            "visual" => Ok(ViewKind::Visual),
            "report" | "document" => Ok(ViewKind::Report),
            _ => Err(crate::error::DocError::InvalidView(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

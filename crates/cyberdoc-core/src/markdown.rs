//! Structural parsing of rendered Markdown into a headline and titled sections.

use crate::types::Locale;
use serde::{Deserialize, Serialize};

/// Headline used when the document has no `# ` line.
pub const DEFAULT_HEADLINE: &str = "Template";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedStructure {
    pub headline: String,
    /// Never empty.
    pub sections: Vec<Section>,
}

/// Split `rendered` into a headline and sections.
///
/// Only the first `# ` line becomes the headline; later ones are ordinary
/// content. `## ` opens a section, and a section with no content lines is
/// dropped when the next one opens. Lines before the first `## ` land in an
/// implicit section titled by `locale`.
pub fn parse(rendered: &str, locale: Locale) -> ParsedStructure {
    let default_title = locale.default_section_title();
    let mut headline: Option<String> = None;
    let mut sections = Vec::new();
    let mut current = Section::new(default_title);

    for raw in rendered.lines() {
        // Heading prefixes are matched before trailing whitespace goes, so
        // `"#   "` is still an (empty) headline.
        let lead = raw.trim_start();
        let line = lead.trim_end();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = lead.strip_prefix("## ") {
            let finished = std::mem::replace(&mut current, Section::new(rest.trim()));
            if !finished.lines.is_empty() {
                sections.push(finished);
            }
            continue;
        }
        if headline.is_none() {
            if let Some(rest) = lead.strip_prefix("# ") {
                headline = Some(rest.trim().to_string());
                continue;
            }
        }
        current.lines.push(line.to_string());
    }
    if !current.lines.is_empty() {
        sections.push(current);
    }

    if sections.is_empty() {
        sections.push(Section {
            title: default_title.to_string(),
            lines: vec![rendered.trim().to_string()],
        });
    }

    ParsedStructure {
        headline: headline
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HEADLINE.to_string()),
        sections,
    }
}

// ---------------------------------------------------------------------------
// Line classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Bullet,
    TableRow,
    Prose,
}

/// Classify a trimmed section line. Returns the kind and the display text:
/// bullets lose their marker, everything else is returned unchanged.
pub fn classify(line: &str) -> (LineKind, &str) {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return (LineKind::Bullet, rest.trim_start());
    }
    if line.starts_with('|') {
        return (LineKind::TableRow, line);
    }
    (LineKind::Prose, line)
}

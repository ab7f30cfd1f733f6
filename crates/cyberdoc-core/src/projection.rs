//! Read-only views over a parsed document.
//!
//! The raw, visual and report views all come from the same rendered string and
//! its [`ParsedStructure`]; none of them carries content the others lack.

use crate::inline::{plain_text, render_inline, Span};
use crate::markdown::{classify, LineKind, ParsedStructure, Section};
use crate::template::CyberTemplate;
use crate::types::Locale;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const ELLIPSIS: char = '…';

// ---------------------------------------------------------------------------
// RawView
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawView {
    pub markdown: String,
}

impl RawView {
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            markdown: rendered.into(),
        }
    }
}

impl fmt::Display for RawView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markdown)
    }
}

// ---------------------------------------------------------------------------
// VisualView
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualLine {
    Bullet { spans: Vec<Span> },
    /// Kept verbatim, shown monospace.
    TableRow { text: String },
    Prose { spans: Vec<Span> },
}

impl VisualLine {
    pub fn from_line(line: &str) -> Self {
        match classify(line) {
            (LineKind::Bullet, rest) => VisualLine::Bullet {
                spans: render_inline(rest),
            },
            (LineKind::TableRow, text) => VisualLine::TableRow {
                text: text.to_string(),
            },
            (LineKind::Prose, text) => VisualLine::Prose {
                spans: render_inline(text),
            },
        }
    }

    pub fn kind(&self) -> LineKind {
        match self {
            VisualLine::Bullet { .. } => LineKind::Bullet,
            VisualLine::TableRow { .. } => LineKind::TableRow,
            VisualLine::Prose { .. } => LineKind::Prose,
        }
    }

    fn plain(&self) -> String {
        match self {
            VisualLine::Bullet { spans } | VisualLine::Prose { spans } => {
                spans.iter().map(Span::text).collect()
            }
            VisualLine::TableRow { text } => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualSection {
    pub title: String,
    pub lines: Vec<VisualLine>,
}

impl From<&Section> for VisualSection {
    fn from(section: &Section) -> Self {
        Self {
            title: section.title.clone(),
            lines: section.lines.iter().map(|l| VisualLine::from_line(l)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualView {
    pub headline: String,
    pub sections: Vec<VisualSection>,
}

impl VisualView {
    pub fn build(parsed: &ParsedStructure) -> Self {
        Self {
            headline: parsed.headline.clone(),
            sections: parsed.sections.iter().map(VisualSection::from).collect(),
        }
    }
}

fn write_sections(f: &mut fmt::Formatter<'_>, sections: &[VisualSection]) -> fmt::Result {
    for section in sections {
        writeln!(f)?;
        writeln!(f, "{}", section.title)?;
        writeln!(f, "{}", "-".repeat(section.title.chars().count().max(1)))?;
        for line in &section.lines {
            match line {
                VisualLine::Bullet { .. } => writeln!(f, "  • {}", line.plain())?,
                VisualLine::TableRow { text } => writeln!(f, "    {text}")?,
                VisualLine::Prose { .. } => writeln!(f, "{}", line.plain())?,
            }
        }
    }
    Ok(())
}

impl fmt::Display for VisualView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        writeln!(f, "{}", "=".repeat(self.headline.chars().count().max(1)))?;
        write_sections(f, &self.sections)
    }
}

// ---------------------------------------------------------------------------
// ReportView
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub locale: Locale,
    pub highlight_sections: usize,
    pub highlight_max_chars: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            highlight_sections: 3,
            highlight_max_chars: 140,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub section: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportView {
    pub template_id: String,
    pub title: String,
    pub description: String,
    pub updated_at: NaiveDate,
    pub generated_at: DateTime<Utc>,
    pub headline: String,
    pub section_count: usize,
    pub variable_count: usize,
    pub required_count: usize,
    pub missing: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub sections: Vec<VisualSection>,
    #[serde(skip)]
    locale: Locale,
}

impl ReportView {
    /// Build the report. `generated_at` is captured once by the caller; the
    /// view never reads the clock itself.
    pub fn build(
        template: &CyberTemplate,
        parsed: &ParsedStructure,
        missing: &[String],
        generated_at: DateTime<Utc>,
        opts: ReportOptions,
    ) -> Self {
        let visual = VisualView::build(parsed);
        let highlights = parsed
            .sections
            .iter()
            .take(opts.highlight_sections)
            .map(|s| Highlight {
                section: s.title.clone(),
                text: highlight_for(s, opts.highlight_max_chars)
                    .unwrap_or_else(|| opts.locale.empty_highlight().to_string()),
            })
            .collect();

        Self {
            template_id: template.id.clone(),
            title: template.title.clone(),
            description: template.description.clone(),
            updated_at: template.updated_at,
            generated_at,
            headline: visual.headline,
            section_count: parsed.sections.len(),
            variable_count: template.variables.len(),
            required_count: template.required_count(),
            missing: missing.to_vec(),
            highlights,
            sections: visual.sections,
            locale: opts.locale,
        }
    }

    pub fn visual(&self) -> VisualView {
        VisualView {
            headline: self.headline.clone(),
            sections: self.sections.clone(),
        }
    }
}

/// First non-table line of `section` with visible text, as plain text.
fn highlight_for(section: &Section, max_chars: usize) -> Option<String> {
    section
        .lines
        .iter()
        .filter_map(|line| match classify(line) {
            (LineKind::TableRow, _) => None,
            (_, text) => Some(plain_text(text)),
        })
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
        .map(|text| truncate_chars(&text, max_chars))
}

/// Cap `s` at `max` characters, ending with an ellipsis when cut.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.truncate(out.trim_end().len());
    out.push(ELLIPSIS);
    out
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.locale.report_labels();
        writeln!(f, "{}", self.headline)?;
        writeln!(f, "{}", "=".repeat(self.headline.chars().count().max(1)))?;
        writeln!(f, "{} · {}", self.title, self.template_id)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }
        writeln!(
            f,
            "{}: {}",
            labels.generated_at,
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(
            f,
            "{}: {}  {}: {}  {}: {}",
            labels.sections,
            self.section_count,
            labels.variables,
            self.variable_count,
            labels.required,
            self.required_count
        )?;
        if !self.missing.is_empty() {
            writeln!(f, "{}: {}", labels.missing, self.missing.join(", "))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", labels.highlights)?;
        for h in &self.highlights {
            writeln!(f, "  [{}] {}", h.section, h.text)?;
        }
        write_sections(f, &self.sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse;
    use crate::template::TemplateVariable;
    use chrono::TimeZone;

    fn template(content: &str) -> CyberTemplate {
        CyberTemplate {
            id: "risk-register".to_string(),
            title: "Risk register".to_string(),
            description: "Quarterly risk review".to_string(),
            variables: vec![
                TemplateVariable::new("owner", "Owner").required(),
                TemplateVariable::new("scope", "Scope"),
            ],
            content: content.to_string(),
            updated_at: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn visual_classifies_lines() {
        let parsed = parse("# H\n## S\n- **a** item\n| c | d |\nplain **b**", Locale::En);
        let view = VisualView::build(&parsed);
        let lines = &view.sections[0].lines;
        assert_eq!(
            lines[0],
            VisualLine::Bullet {
                spans: vec![Span::Bold("a".into()), Span::Text(" item".into())]
            }
        );
        assert_eq!(
            lines[1],
            VisualLine::TableRow {
                text: "| c | d |".into()
            }
        );
        assert_eq!(lines[2].kind(), LineKind::Prose);
    }

    #[test]
    fn report_counts_and_highlights() {
        let content = "# Review\n## Tables\n| a | b |\n## Actions\n- **Patch** servers\n## Notes\nkeep\n## Extra\nignored";
        let t = template(content);
        let parsed = parse(content, Locale::En);
        let report = ReportView::build(&t, &parsed, &[], at(), ReportOptions::default());
        assert_eq!(report.section_count, 4);
        assert_eq!(report.variable_count, 2);
        assert_eq!(report.required_count, 1);
        assert_eq!(report.highlights.len(), 3);
        assert_eq!(report.highlights[0].text, "No content");
        assert_eq!(report.highlights[1].text, "Patch servers");
        assert_eq!(report.highlights[2].text, "keep");
    }

    #[test]
    fn report_highlight_truncates() {
        let content = "## Long\nabcdefghijklmnopqrstuvwxyz";
        let parsed = parse(content, Locale::En);
        let opts = ReportOptions {
            highlight_max_chars: 10,
            ..ReportOptions::default()
        };
        let report = ReportView::build(&template(content), &parsed, &[], at(), opts);
        assert_eq!(report.highlights[0].text, "abcdefghi…");
        assert_eq!(report.highlights[0].text.chars().count(), 10);
    }

    #[test]
    fn report_is_deterministic_and_matches_visual() {
        let content = "# R\n## S\n- x";
        let parsed = parse(content, Locale::En);
        let t = template(content);
        let missing = vec!["owner".to_string()];
        let a = ReportView::build(&t, &parsed, &missing, at(), ReportOptions::default());
        let b = ReportView::build(&t, &parsed, &missing, at(), ReportOptions::default());
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.visual(), VisualView::build(&parsed));
        assert!(a.to_string().contains("Generated at: 2024-06-01 09:30 UTC"));
        assert!(a.to_string().contains("Missing: owner"));
    }

    #[test]
    fn french_report_labels() {
        let content = "## S\n| only | table |";
        let parsed = parse(content, Locale::Fr);
        let opts = ReportOptions {
            locale: Locale::Fr,
            ..ReportOptions::default()
        };
        let report = ReportView::build(&template(content), &parsed, &[], at(), opts);
        assert_eq!(report.highlights[0].text, "Aucun contenu");
        assert!(report.to_string().contains("Généré le"));
    }

    #[test]
    fn truncate_respects_multibyte_chars() {
        assert_eq!(truncate_chars("ééééé", 3), "éé…");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("ab cd", 4), "ab…");
    }

    #[test]
    fn visual_display_strips_markers() {
        let parsed = parse("# Plan\n## Steps\n- **Isolate** host", Locale::En);
        let text = VisualView::build(&parsed).to_string();
        assert!(text.starts_with("Plan\n====\n"));
        assert!(text.contains("  • Isolate host"));
    }
}

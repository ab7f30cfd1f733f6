use serde::{Deserialize, Serialize};

const BOLD_MARKER: &str = "**";

/// A run of inline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Bold(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Text(s) | Span::Bold(s) => s,
        }
    }
}

/// Split `line` into plain and bold runs.
///
/// Markers pair up left to right. A trailing unpaired marker is dropped and
/// the text after it stays plain. Empty runs are omitted and neighbouring
/// plain runs are merged.
pub fn render_inline(line: &str) -> Vec<Span> {
    let parts: Vec<&str> = line.split(BOLD_MARKER).collect();
    // An even part count means the last marker has no partner.
    let paired_parts = if parts.len() % 2 == 0 {
        parts.len() - 1
    } else {
        parts.len()
    };

    let mut spans: Vec<Span> = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        let bold = i % 2 == 1 && i < paired_parts;
        if bold {
            spans.push(Span::Bold(part.to_string()));
        } else if let Some(Span::Text(prev)) = spans.last_mut() {
            prev.push_str(part);
        } else {
            spans.push(Span::Text(part.to_string()));
        }
    }
    spans
}

/// The visible text of `line` with all bold markers removed.
pub fn plain_text(line: &str) -> String {
    render_inline(line).iter().map(Span::text).collect()
}

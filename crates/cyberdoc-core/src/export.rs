//! File and clipboard export.
//!
//! Platform I/O sits behind the [`Exporter`] trait. The functions here build
//! payloads, call the exporter once, and turn the outcome into a [`Notice`]
//! so a failing clipboard or disk never reaches the render pipeline as an
//! error.

use crate::error::Result;
use crate::io;
use crate::template::CyberTemplate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const MARKDOWN_EXT: &str = "md";
pub const DEFAULT_FILENAME_MAX_LEN: usize = 80;
const FALLBACK_STEM: &str = "template";

// ---------------------------------------------------------------------------
// Filenames
// ---------------------------------------------------------------------------

/// Lowercase ASCII slug: diacritics stripped, every run of other characters
/// collapsed to a single `-`, no leading or trailing separator, at most
/// `max_len` bytes.
pub fn slugify(s: &str, max_len: usize) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_sep = false;
    for c in s.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out.truncate(max_len);
    out.truncate(out.trim_end_matches('-').len());
    out
}

/// Deterministic export filename for a template: `<id>-<title>.md`.
pub fn export_filename(id: &str, title: &str, max_len: usize) -> String {
    let stem = slugify(&format!("{id} {title}"), max_len);
    let stem = if stem.is_empty() {
        FALLBACK_STEM
    } else {
        stem.as_str()
    };
    format!("{stem}.{MARKDOWN_EXT}")
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    pub fn markdown(template: &CyberTemplate, rendered: &str, max_len: usize) -> Self {
        Self {
            filename: export_filename(&template.id, &template.title, max_len),
            bytes: rendered.as_bytes().to_vec(),
        }
    }
}

/// What goes to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopySource {
    /// The document with values substituted.
    Rendered,
    /// The template body as authored, markers intact.
    Raw,
}

// ---------------------------------------------------------------------------
// Exporter
// ---------------------------------------------------------------------------

/// Platform side effects used by export. Implementations report failure
/// through `Result`; callers never see a panic.
pub trait Exporter {
    /// Persist `bytes` under `name`, returning where it landed.
    fn save_file(&mut self, name: &str, bytes: &[u8]) -> Result<PathBuf>;

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;
}

/// Writes files into a directory; has no clipboard.
#[derive(Debug, Clone)]
pub struct FsExporter {
    dir: PathBuf,
}

impl FsExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Exporter for FsExporter {
    fn save_file(&mut self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(name);
        io::atomic_write(&path, bytes)?;
        Ok(path)
    }

    fn copy_to_clipboard(&mut self, _text: &str) -> Result<()> {
        Err(crate::error::DocError::Clipboard(
            "no clipboard available for filesystem export".to_string(),
        ))
    }
}

/// In-memory exporter for tests and headless callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryExporter {
    pub files: Vec<(String, Vec<u8>)>,
    pub clipboard: Option<String>,
    /// When set, clipboard writes fail with this reason.
    pub deny_clipboard: Option<String>,
}

impl Exporter for MemoryExporter {
    fn save_file(&mut self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.files.push((name.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(name))
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        if let Some(reason) = &self.deny_clipboard {
            return Err(crate::error::DocError::Clipboard(reason.clone()));
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Notice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Failure,
}

/// Transient, user-facing outcome of an export side effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            path: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Failure,
            message: message.into(),
            path: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}

/// Save `rendered` as a Markdown file named after `template`.
pub fn download(
    exporter: &mut dyn Exporter,
    template: &CyberTemplate,
    rendered: &str,
    max_len: usize,
) -> Notice {
    let payload = ExportPayload::markdown(template, rendered, max_len);
    match exporter.save_file(&payload.filename, &payload.bytes) {
        Ok(path) => {
            tracing::info!(template = %template.id, path = %path.display(), "document saved");
            Notice {
                path: Some(path),
                ..Notice::success(format!("Saved {}", payload.filename))
            }
        }
        Err(e) => {
            tracing::warn!(template = %template.id, error = %e, "document save failed");
            Notice::failure(format!("Could not save {}: {e}", payload.filename))
        }
    }
}

/// Copy the rendered document, or the raw template body, to the clipboard.
pub fn copy(
    exporter: &mut dyn Exporter,
    template: &CyberTemplate,
    rendered: &str,
    source: CopySource,
) -> Notice {
    let text = match source {
        CopySource::Rendered => rendered,
        CopySource::Raw => template.content.as_str(),
    };
    match exporter.copy_to_clipboard(text) {
        Ok(()) => {
            tracing::info!(template = %template.id, ?source, "copied to clipboard");
            Notice::success("Copied to clipboard")
        }
        Err(e) => {
            tracing::warn!(template = %template.id, error = %e, "clipboard write failed");
            Notice::failure(format!("Copy failed: {e}"))
        }
    }
}

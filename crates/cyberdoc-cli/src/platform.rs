//! Host adapters for the export side effects: files on disk and the system
//! clipboard through the platform's copy utility.

use cyberdoc_core::error::{DocError, Result};
use cyberdoc_core::export::{Exporter, FsExporter};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub struct SystemExporter {
    fs: FsExporter,
}

impl SystemExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            fs: FsExporter::new(dir),
        }
    }
}

impl Exporter for SystemExporter {
    fn save_file(&mut self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.fs.save_file(name, bytes)
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        let mut last_err = String::from("no clipboard utility for this platform");
        for (program, args) in clipboard_commands() {
            match pipe_to(program, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::debug!(program, error = %e, "clipboard utility failed");
                    last_err = format!("{program}: {e}");
                }
            }
        }
        Err(DocError::Clipboard(last_err))
    }
}

fn clipboard_commands() -> &'static [(&'static str, &'static [&'static str])] {
    if cfg!(target_os = "macos") {
        &[("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        &[("clip", &[])]
    } else if cfg!(target_os = "linux") {
        &[
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ]
    } else {
        &[]
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    // Closing stdin before waiting lets the utility see EOF. The child is
    // reaped even when the write fails.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("exited with {status}")))
    }
}

use crate::error::{DocError, Result};
use crate::export::DEFAULT_FILENAME_MAX_LEN;
use crate::paths;
use crate::projection::ReportOptions;
use crate::types::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ReportConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_highlight_sections")]
    pub highlight_sections: usize,
    #[serde(default = "default_highlight_max_chars")]
    pub highlight_max_chars: usize,
}

fn default_highlight_sections() -> usize {
    3
}

fn default_highlight_max_chars() -> usize {
    140
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            highlight_sections: default_highlight_sections(),
            highlight_max_chars: default_highlight_max_chars(),
        }
    }
}

// ---------------------------------------------------------------------------
// ExportConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_filename_max_len")]
    pub filename_max_len: usize,
    /// Output directory, relative to the project root. Defaults to
    /// `.cyberdoc/exports`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

fn default_filename_max_len() -> usize {
    DEFAULT_FILENAME_MAX_LEN
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_max_len: default_filename_max_len(),
            dir: None,
        }
    }
}

// ---------------------------------------------------------------------------
// PrintConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Seconds the temporary print file lives before it is removed, whether
    /// or not the viewer has finished with it.
    #[serde(default = "default_teardown_secs")]
    pub teardown_secs: u64,
}

fn default_teardown_secs() -> u64 {
    5
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            teardown_secs: default_teardown_secs(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub print: PrintConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            locale: Locale::default(),
            report: ReportConfig::default(),
            export: ExportConfig::default(),
            print: PrintConfig::default(),
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        let Some(data) = crate::io::read_optional(&path)? else {
            return Err(DocError::NotInitialized);
        };
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Like [`Config::load`], but an uninitialized project gets defaults.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(DocError::NotInitialized) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            locale: self.locale,
            highlight_sections: self.report.highlight_sections,
            highlight_max_chars: self.report.highlight_max_chars,
        }
    }

    pub fn export_dir(&self, root: &Path) -> PathBuf {
        match &self.export.dir {
            Some(dir) => root.join(dir),
            None => paths::exports_dir(root),
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.export.filename_max_len == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "export.filename_max_len is 0: every export would be named 'template.md'"
                    .to_string(),
            });
        }

        if self.report.highlight_max_chars < 10 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "report.highlight_max_chars={} is very short",
                    self.report.highlight_max_chars
                ),
            });
        }

        if self.report.highlight_sections == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "report.highlight_sections is 0: reports will have no highlights"
                    .to_string(),
            });
        }

        if self.print.teardown_secs > 600 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "print.teardown_secs={} keeps temporary files around for a long time",
                    self.print.teardown_secs
                ),
            });
        }

        if let Some(dir) = &self.export.dir {
            if dir.is_absolute() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "export.dir '{}' is absolute; exports will not stay inside the project",
                        dir.display()
                    ),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("not initialized: run 'cyberdoc init'")]
    NotInitialized,

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("duplicate template id: {0}")]
    DuplicateTemplate(String),

    #[error("invalid template id '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidTemplateId(String),

    #[error("template '{template}' declares variable '{key}' more than once")]
    DuplicateVariable { template: String, key: String },

    #[error("template '{template}' declares invalid variable key '{key}': must be non-empty without braces or surrounding spaces")]
    InvalidVariableKey { template: String, key: String },

    #[error("template '{template}' has no variable '{key}'")]
    UnknownVariable { template: String, key: String },

    #[error("invalid locale: {0}")]
    InvalidLocale(String),

    #[error("invalid view: {0} (expected raw, visual or report)")]
    InvalidView(String),

    #[error("invalid value assignment '{0}': expected key=value")]
    InvalidAssignment(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DocError>;

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod inline;
pub mod io;
pub mod markdown;
pub mod paths;
pub mod projection;
pub mod render;
pub mod session;
pub mod template;
pub mod types;
pub mod values;

pub use catalog::{Catalog, TemplateProvider};
pub use error::{DocError, Result};
pub use session::TemplateSession;
pub use template::{CyberTemplate, TemplateVariable};
pub use values::ValueMap;

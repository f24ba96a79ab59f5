//! Error types for rendering.
//!
//! [`RenderError`] abstracts over the template engine's errors so the public
//! API does not expose minijinja types.

use thiserror::Error;

/// Error type for rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template syntax error or evaluation failure.
    #[error("template error: {0}")]
    Template(String),

    /// Template not found in the registry.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Data serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::BadSerialization => RenderError::Serialization(err.to_string()),
            _ => RenderError::Template(err.to_string()),
        }
    }
}

//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when configuring a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A field name that the record type does not expose.
    #[error("unknown search field '{field}' (available: {available})")]
    UnknownField { field: String, available: String },

    /// A field restriction with nothing in it.
    #[error("a search needs at least one field")]
    NoFields,
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SearchError>;

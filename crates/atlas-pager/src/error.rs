//! Error types for the pager crate.

use thiserror::Error;

/// Errors for pagination parameters read from untrusted input.
///
/// The infallible constructors panic on the same conditions; these are for
/// call sites that take the values from configuration or the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    /// Page size of zero.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Result type for pager operations.
pub type Result<T> = std::result::Result<T, PagerError>;

//! Error types for spell lookups.

use thiserror::Error;

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur while looking up a spell.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The spell name was blank.
    #[error("please enter a spell name")]
    EmptyName,

    /// The page answered with a non-success status.
    #[error("failed to fetch the spell page (HTTP {0})")]
    Status(u16),

    /// The request could not be completed.
    #[error("request failed: {0}")]
    Request(String),

    /// A markup pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

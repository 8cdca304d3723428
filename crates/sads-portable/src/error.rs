//! Boundary failure types.

use thiserror::Error;

/// Errors surfaced when serialized inputs fail to parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortableError {
    /// The responsive rules payload failed to parse.
    #[error("malformed responsive rules JSON: {0}")]
    MalformedRules(String),

    /// The breakpoints map failed to parse.
    #[error("malformed breakpoints JSON: {0}")]
    MalformedBreakpoints(String),

    /// A theme category blob failed to parse.
    #[error("malformed theme category JSON for '{category}': {message}")]
    MalformedCategory { category: String, message: String },
}

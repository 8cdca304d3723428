//! Failure types for the serialized call boundary.
//!
//! No failure in this engine propagates as a panic that could abort page
//! rendering. Malformed input is reported as a structured value; everything
//! else degrades to "fewer rules applied".

use thiserror::Error;

/// Errors surfaced when inputs cross the JSON-serialized boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoundaryError {
    /// The responsive rules payload failed to parse.
    #[error("malformed responsive rules JSON: {0}")]
    MalformedRules(String),

    /// The breakpoints map failed to parse.
    #[error("malformed breakpoints JSON: {0}")]
    MalformedBreakpoints(String),

    /// A theme category blob failed to parse.
    #[error("malformed theme category JSON for '{category}': {message}")]
    MalformedCategory { category: String, message: String },

    /// A serialized styling request failed to decode.
    #[error("malformed styling request: {0}")]
    MalformedRequest(String),
}

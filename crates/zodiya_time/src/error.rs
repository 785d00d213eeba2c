//! Error types for instant validation and parsing.

use thiserror::Error;

/// Errors from constructing, parsing or converting a [`crate::UtcInstant`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range.
    #[error("invalid instant: {0}")]
    InvalidInstant(String),
    /// The text could not be parsed as an ISO-8601 UTC date-time.
    #[error("cannot parse instant: {0}")]
    Parse(String),
}

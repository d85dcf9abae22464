//! Error types for civil time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil time validation, parsing, or conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date or clock field outside the supported calendar range.
    InvalidInstant(String),
    /// Text could not be parsed as an ISO-8601 civil time.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInstant(msg) => write!(f, "invalid instant: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

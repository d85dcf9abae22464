//! Error types for panchang search and report assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_time::TimeError;
use panchang_vedic::VedicError;

/// Errors that abort a query. Per-field failures travel inside the report.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    Time(TimeError),
    Vedic(VedicError),
    /// Configuration value rejected before any computation.
    InvalidConfig(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Vedic(e) => write!(f, "{e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Vedic(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::Time(t) => Self::Time(t),
            other => Self::Vedic(other),
        }
    }
}

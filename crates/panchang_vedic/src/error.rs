//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_time::TimeError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from civil time conversion.
    Time(TimeError),
    /// Latitude, longitude or altitude out of range or not finite.
    InvalidCoordinate(String),
    /// Iterative solver did not converge; carries its last estimate (JD UT).
    NumericDivergence {
        what: &'static str,
        last_estimate_jd: f64,
    },
    /// Interval bounds out of order.
    InvalidInterval(&'static str),
    /// Name did not match any member of an enumeration.
    UnknownName { kind: &'static str, name: String },
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
            Self::NumericDivergence {
                what,
                last_estimate_jd,
            } => write!(
                f,
                "no convergence: {what} (last estimate JD {last_estimate_jd:.6})"
            ),
            Self::InvalidInterval(msg) => write!(f, "invalid interval: {msg}"),
            Self::UnknownName { kind, name } => write!(f, "unknown {kind} name: {name:?}"),
        }
    }
}

impl Error for VedicError {}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

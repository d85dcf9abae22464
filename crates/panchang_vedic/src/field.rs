//! Per-field outcome of a derived quantity.
//!
//! A panchang report is assembled from many independent solves. One of them
//! failing (the Sun never setting, a root search running out of steps) must
//! not sink the rest, so each derived value carries its own status.

use std::fmt::Display;

use serde::Serialize;

/// A derived value together with how much it can be trusted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Field<T> {
    /// Converged, within tolerance.
    Valid(T),
    /// Best estimate from a solver that did not converge.
    LowConfidence(T),
    /// No value exists; carries the reason.
    Indeterminate(String),
}

impl<T> Field<T> {
    pub fn indeterminate(reason: impl Into<String>) -> Self {
        Self::Indeterminate(reason.into())
    }

    /// Valid on success; an error becomes the indeterminate reason.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::Valid(v),
            Err(e) => Self::Indeterminate(e.to_string()),
        }
    }

    /// The value, whether valid or low-confidence.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(v) | Self::LowConfidence(v) => Some(v),
            Self::Indeterminate(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Valid(v) | Self::LowConfidence(v) => Some(v),
            Self::Indeterminate(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate(_))
    }

    /// Transform the value, keeping the status.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Valid(v) => Field::Valid(f(v)),
            Self::LowConfidence(v) => Field::LowConfidence(f(v)),
            Self::Indeterminate(r) => Field::Indeterminate(r),
        }
    }

    /// Chain a derivation that may itself degrade or fail.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Field<U>) -> Field<U> {
        match self {
            Self::Valid(v) => f(v),
            Self::LowConfidence(v) => match f(v) {
                Field::Valid(u) | Field::LowConfidence(u) => Field::LowConfidence(u),
                Field::Indeterminate(r) => Field::Indeterminate(r),
            },
            Self::Indeterminate(r) => Field::Indeterminate(r),
        }
    }

    /// Combine with another field; the result is only as good as the worse input.
    pub fn zip<U>(self, other: Field<U>) -> Field<(T, U)> {
        match (self, other) {
            (Self::Indeterminate(r), _) => Field::Indeterminate(r),
            (_, Field::Indeterminate(r)) => Field::Indeterminate(r),
            (Self::Valid(a), Field::Valid(b)) => Field::Valid((a, b)),
            (Self::Valid(a) | Self::LowConfidence(a), Field::Valid(b) | Field::LowConfidence(b)) => {
                Field::LowConfidence((a, b))
            }
        }
    }
}

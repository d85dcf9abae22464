//! Immutable configuration injected into every panchang query.

use serde::Serialize;

use panchang_vedic::{AyanamshaSystem, RiseSetConfig};

/// Settings shared by all computations of one query or batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangConfig {
    pub ayanamsha: AyanamshaSystem,
    /// Add nutation in longitude to the ayanamsha ("true" ayanamsha).
    pub use_nutation: bool,
    pub riseset: RiseSetConfig,
    /// Collect a diagnostic trace into the report.
    pub trace: bool,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::Lahiri,
            use_nutation: true,
            riseset: RiseSetConfig::default(),
            trace: false,
        }
    }
}

impl PanchangConfig {
    pub fn new(ayanamsha: AyanamshaSystem, use_nutation: bool) -> Self {
        Self {
            ayanamsha,
            use_nutation,
            ..Self::default()
        }
    }

    pub fn with_trace(self, trace: bool) -> Self {
        Self { trace, ..self }
    }

    pub fn with_riseset(self, riseset: RiseSetConfig) -> Self {
        Self { riseset, ..self }
    }
}

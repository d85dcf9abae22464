//! Diagnostic trace collected while a report is assembled.

use log::{debug, log_enabled, Level};
use serde::Serialize;

/// One diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub stage: &'static str,
    pub message: String,
}

/// Collects [`TraceEntry`]s when enabled; always forwards to the `debug` log.
#[derive(Debug, Default)]
pub struct Trace {
    entries: Option<Vec<TraceEntry>>,
}

impl Trace {
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: enabled.then(Vec::new),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    /// Record a message. The closure only runs if someone will read it.
    pub fn record(&mut self, stage: &'static str, message: impl FnOnce() -> String) {
        let to_log = log_enabled!(Level::Debug);
        if self.entries.is_none() && !to_log {
            return;
        }
        let message = message();
        if to_log {
            debug!("[{stage}] {message}");
        }
        if let Some(entries) = self.entries.as_mut() {
            entries.push(TraceEntry { stage, message });
        }
    }

    /// The collected entries, `None` when tracing was off.
    pub fn finish(self) -> Option<Vec<TraceEntry>> {
        self.entries
    }
}

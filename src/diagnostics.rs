//! Developer-facing diagnostic channel.

use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// Logged when a capture request fails for any reason.
pub const WEBCAM_ACCESS_FAILED: &str = "Something went wrong with webcam access!";

/// Log target used for diagnostic lines
pub const CONSOLE_TARGET: &str = "console";

pub trait DiagnosticSink: Send + Sync {
    fn log(&self, message: &str);
}

/// Writes diagnostics through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn log(&self, message: &str) {
        log::warn!(target: CONSOLE_TARGET, "{}", message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub message: String,
    pub logged_at: DateTime<Utc>,
}

/// Keeps every diagnostic in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.message).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn log(&self, message: &str) {
        log::debug!(target: CONSOLE_TARGET, "{}", message);
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(DiagnosticEntry {
                message: message.to_string(),
                logged_at: Utc::now(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.log("first");
        sink.log("second");

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_console_sink_does_not_panic_without_logger() {
        ConsoleSink.log(WEBCAM_ACCESS_FAILED);
    }
}

//! Port for the structured import event log.
//!
//! Defines the [`ImportEventLogger`] trait for recording per-document
//! outcomes (parsed, no blocks, read failure, upload) in a machine-readable
//! form.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port keeps an audit trail that can
//! be diffed between runs.

use serde_json::Value;

/// A structured import event.
pub struct ImportEvent {
    /// Event type identifier (e.g., "document_parsed", "upload_complete").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ImportEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging import events.
///
/// `log` is synchronous and non-fallible; a failing event log must never
/// abort an import.
pub trait ImportEventLogger: Send + Sync {
    /// Record an import event.
    fn log(&self, event: ImportEvent);
}

/// No-op implementation for tests and when the event log is disabled.
pub struct NoImportLogger;

impl ImportEventLogger for NoImportLogger {
    fn log(&self, _event: ImportEvent) {}
}

//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording what crossed the
//! visitor-client boundary: every inbound event the view applied and every
//! outbound call it made.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the exchange
//! in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured transcript entry.
pub struct TranscriptEntry {
    /// Entry type identifier (`"inbound"`, `"send_message"`, `"sneak_peek"`).
    pub entry_type: &'static str,
    /// JSON payload with entry-specific data.
    pub payload: Value,
}

impl TranscriptEntry {
    pub fn new(entry_type: &'static str, payload: Value) -> Self {
        Self {
            entry_type,
            payload,
        }
    }
}

/// Port for logging transcript entries.
///
/// The `log` method is synchronous and non-fallible; logging failures never
/// reach the chat view.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, entry: TranscriptEntry);
}

/// No-op implementation for tests and when transcripts are disabled.
pub struct NoTranscript;

impl TranscriptLogger for NoTranscript {
    fn log(&self, _entry: TranscriptEntry) {}
}

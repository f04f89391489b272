//! JSONL file writer for transcript entries.
//!
//! Each [`TranscriptEntry`] becomes one JSON line: the payload's fields plus
//! `type` and `timestamp`. Lines are appended, so several sessions can share
//! a file.

use chatview_application::{TranscriptEntry, TranscriptLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL transcript logger. Thread-safe via `Mutex<BufWriter<File>>`,
/// flushed after every line and on `Drop`.
pub struct JsonlTranscriptLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlTranscriptLogger {
    /// Open (or create) the transcript file, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened; the chat keeps running
    /// without a transcript.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open transcript file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(entry: TranscriptEntry) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match entry.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert(
            "type".to_string(),
            Value::String(entry.entry_type.to_string()),
        );
        map.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(map)
    }
}

impl TranscriptLogger for JsonlTranscriptLogger {
    fn log(&self, entry: TranscriptEntry) {
        let Ok(line) = serde_json::to_string(&Self::record(entry)) else {
            return;
        };

        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!("Transcript write to {} failed: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlTranscriptLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatview_application::{ChatView, ChatViewConfig};
    use chatview_domain::{StatusChanged, VisitorEvent};
    use crate::LocalVisitorClient;
    use std::sync::Arc;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("chat.jsonl");
        let logger = JsonlTranscriptLogger::open(&path).unwrap();

        logger.log(TranscriptEntry::new(
            "send_message",
            serde_json::json!({"customId": "c1", "text": "hi"}),
        ));
        logger.log(TranscriptEntry::new("sneak_peek", serde_json::json!("h")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "send_message");
        assert_eq!(lines[0]["customId"], "c1");
        assert!(lines[0]["timestamp"].is_string());
        assert_eq!(lines[1]["type"], "sneak_peek");
        assert_eq!(lines[1]["data"], "h");
    }

    #[test]
    fn test_appends_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.jsonl");

        for _ in 0..2 {
            let logger = JsonlTranscriptLogger::open(&path).unwrap();
            logger.log(TranscriptEntry::new("inbound", Value::Null));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_chat_view_traffic_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.jsonl");
        let logger = Arc::new(JsonlTranscriptLogger::open(&path).unwrap());

        let client = Arc::new(LocalVisitorClient::new());
        let mut view = ChatView::attach(client.clone(), ChatViewConfig::default())
            .unwrap()
            .with_transcript(logger.clone());

        client.emit(VisitorEvent::StatusChanged(StatusChanged::new("online")));
        view.drain();
        view.on_send_requested("hello");
        drop(view);
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "inbound");
        assert_eq!(lines[0]["event"], "status_changed");
        assert_eq!(lines[0]["data"]["status"], "online");
        assert_eq!(lines[1]["type"], "send_message");
        assert_eq!(lines[1]["text"], "hello");
    }
}

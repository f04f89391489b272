//! JSONL event scripts
//!
//! A script is a list of visitor events with delays, one JSON object per
//! line:
//!
//! ```text
//! # comments and blank lines are skipped
//! {"delay_ms": 0,   "event": "status_changed", "data": {"status": "online"}}
//! {"delay_ms": 400, "event": "agent_changed",  "data": {"id": "a1", "name": "Bob"}}
//! {"delay_ms": 800, "event": "chat_ended"}
//! ```
//!
//! [`ScriptReplay`] feeds a parsed script into a [`LocalVisitorClient`].

use super::local::LocalVisitorClient;
use chatview_domain::{DomainError, VisitorEvent};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors raised while loading an event script
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Cannot read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: invalid JSON: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: {source}")]
    Event {
        line: usize,
        #[source]
        source: DomainError,
    },
}

/// One raw line of a script
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptEntry {
    #[serde(default)]
    pub delay_ms: u64,
    pub event: String,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScriptStep {
    delay: Duration,
    event: VisitorEvent,
}

/// A parsed, validated event script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventScript {
    steps: Vec<ScriptStep>,
}

impl EventScript {
    /// Parse a script. Every line is decoded up front, so invalid JSON or an
    /// unknown event name is reported with its line number before anything
    /// is replayed. A known event whose payload cannot be decoded is skipped
    /// with a warning.
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let entry: ScriptEntry = serde_json::from_str(trimmed)
                .map_err(|source| ScriptError::Json { line, source })?;
            let event = match VisitorEvent::decode(&entry.event, entry.data) {
                Ok(event) => event,
                Err(source) if source.is_unknown_event() => {
                    return Err(ScriptError::Event { line, source });
                }
                Err(e) => {
                    warn!(line, "Skipping script line: {}", e);
                    continue;
                }
            };

            steps.push(ScriptStep {
                delay: Duration::from_millis(entry.delay_ms),
                event,
            });
        }

        Ok(Self { steps })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::parse(&source)?;
        info!(path = %path.display(), steps = script.len(), "Event script loaded");
        Ok(script)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The scripted events, in order.
    pub fn events(&self) -> impl Iterator<Item = &VisitorEvent> {
        self.steps.iter().map(|s| &s.event)
    }
}

/// Replays an [`EventScript`] into a [`LocalVisitorClient`]
pub struct ScriptReplay {
    script: EventScript,
    honor_delays: bool,
}

impl ScriptReplay {
    pub fn new(script: EventScript) -> Self {
        Self {
            script,
            honor_delays: true,
        }
    }

    /// Ignore per-step delays (headless replays).
    pub fn instant(mut self) -> Self {
        self.honor_delays = false;
        self
    }

    /// Emit every step, waiting out each delay first. Stops early when
    /// `cancel` fires. Returns the number of events emitted.
    pub async fn run(self, client: &LocalVisitorClient, cancel: CancellationToken) -> usize {
        let mut emitted = 0;

        for step in self.script.steps {
            if self.honor_delays && !step.delay.is_zero() {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(step.delay) => {}
                }
            } else if cancel.is_cancelled() {
                break;
            }

            client.emit(step.event);
            emitted += 1;
        }

        debug!(emitted, "Event script replay finished");
        emitted
    }

    /// Run the replay on a background task.
    pub fn spawn(
        self,
        client: Arc<LocalVisitorClient>,
        cancel: CancellationToken,
    ) -> JoinHandle<usize> {
        tokio::spawn(async move { self.run(&client, cancel).await })
    }
}

//! Infrastructure layer for chatview
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: an in-process visitor client driven by event scripts,
//! the JSONL transcript logger, and configuration file loading.

pub mod client;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use client::{
    local::LocalVisitorClient,
    script::{EventScript, ScriptEntry, ScriptError, ScriptReplay},
};
pub use config::{
    ConfigLoader, ConfigValidationError, FileChatConfig, FileClientConfig, FileConfig,
    FileLogConfig, FileTuiConfig,
};
pub use logging::JsonlTranscriptLogger;

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types.

use chatview_application::ChatViewConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("chat_title cannot be empty")]
    EmptyChatTitle,

    #[error("tick_ms cannot be 0")]
    InvalidTick,

    #[error("visitor_id cannot be empty")]
    EmptyVisitorId,
}

/// Raw chat (host contract) configuration from TOML
///
/// # Example
///
/// ```toml
/// [chat]
/// license = 1234567
/// chat_title = "Support"
/// is_chat_on = true
/// greeting = "Hi! How can we help?"
/// no_agents = "We're offline, leave a message"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    pub license: u64,
    pub chat_title: String,
    pub is_chat_on: bool,
    pub greeting: String,
    pub no_agents: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        let defaults = ChatViewConfig::default();
        Self {
            license: defaults.license,
            chat_title: defaults.chat_title,
            is_chat_on: defaults.is_chat_on,
            greeting: defaults.greeting,
            no_agents: defaults.no_agents,
        }
    }
}

impl FileChatConfig {
    pub fn to_chat_view_config(&self) -> ChatViewConfig {
        ChatViewConfig {
            license: self.license,
            chat_title: self.chat_title.clone(),
            is_chat_on: self.is_chat_on,
            greeting: self.greeting.clone(),
            no_agents: self.no_agents.clone(),
        }
    }
}

/// Raw local visitor client configuration from TOML
///
/// # Example
///
/// ```toml
/// [client]
/// script = "demo/session.jsonl"
/// echo_sent = true
/// visitor_id = "visitor"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Event script replayed into the client at startup
    pub script: Option<PathBuf>,
    /// Echo sent messages back as `new_message`, like a live backend does
    pub echo_sent: bool,
    /// Author id used for echoed messages
    pub visitor_id: String,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            script: None,
            echo_sent: true,
            visitor_id: "visitor".to_string(),
        }
    }
}

/// Raw terminal UI configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Length of the exit transition (0 disables it)
    pub exit_animation_ms: u64,
    /// Redraw tick
    pub tick_ms: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            exit_animation_ms: 500,
            tick_ms: 250,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL transcript of client traffic
    pub transcript: Option<PathBuf>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub chat: FileChatConfig,
    pub client: FileClientConfig,
    pub tui: FileTuiConfig,
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.chat.chat_title.trim().is_empty() {
            return Err(ConfigValidationError::EmptyChatTitle);
        }

        if self.tui.tick_ms == 0 {
            return Err(ConfigValidationError::InvalidTick);
        }

        if self.client.visitor_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyVisitorId);
        }

        Ok(())
    }
}

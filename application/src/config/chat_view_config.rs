//! Host contract of the chat view

use serde::{Deserialize, Serialize};

/// Configuration handed to a chat view by its host application.
///
/// The `closeChat` callback of the contract is the [`HostApp`](crate::HostApp)
/// port, passed separately to [`ChatView::close`](crate::ChatView::close).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatViewConfig {
    /// Support account license number
    pub license: u64,
    /// Title shown in the navigation bar
    pub chat_title: String,
    /// Whether the surface renders at all
    pub is_chat_on: bool,
    /// Status line while an agent is online
    pub greeting: String,
    /// Status line while no agent is online
    pub no_agents: String,
}

impl Default for ChatViewConfig {
    fn default() -> Self {
        Self {
            license: 0,
            chat_title: "Chat with us".to_string(),
            is_chat_on: true,
            greeting: "Our agents are available now".to_string(),
            no_agents: "Our agents are not available right now".to_string(),
        }
    }
}

impl ChatViewConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.chat_title = title.into();
        self
    }

    pub fn with_chat_on(mut self, on: bool) -> Self {
        self.is_chat_on = on;
        self
    }
}

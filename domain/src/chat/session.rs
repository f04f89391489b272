//! Session state and its transitions
//!
//! [`SessionState`] is the single source of truth for one mounted chat view.
//! Every inbound [`VisitorEvent`] maps to exactly one transition:
//!
//! | event              | transition                                  |
//! |--------------------|---------------------------------------------|
//! | `new_message`      | [`SessionState::add_message`]               |
//! | `agent_changed`    | [`SessionState::upsert_profile`] (agent)    |
//! | `visitor_data`     | [`SessionState::upsert_profile`] (visitor)  |
//! | `status_changed`   | [`SessionState::set_status`]                |
//! | `typing_indicator` | [`SessionState::set_typing`]                |
//! | `chat_ended`       | [`SessionState::add_closed_notice`]         |

use super::entities::{Message, User};
use super::roster::{Roster, UpsertOutcome};
use super::value_objects::{MessageId, UserKind};
use crate::event::{NewMessage, StatusChanged, UserProfile, VisitorEvent};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tracing::debug;

/// Caption shown while an agent is typing
pub const TYPING_CAPTION: &str = "Agent is typing...";

/// Text of the synthetic message added when the chat ends
pub const CHAT_CLOSED_TEXT: &str = "Chat is closed";

/// Name shown for messages whose author was not in the roster
pub const UNKNOWN_AUTHOR: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Newest first, in arrival order
    messages: VecDeque<Message>,
    users: Roster,
    is_online: bool,
    typing_caption: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            users: Roster::new(),
            is_online: false,
            typing_caption: None,
        }
    }
}

impl SessionState {
    /// Empty session with the system user seeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one inbound event.
    pub fn apply(&mut self, event: &VisitorEvent) {
        match event {
            VisitorEvent::NewMessage(payload) => {
                self.add_message(payload);
            }
            VisitorEvent::AgentChanged(profile) => {
                self.upsert_profile(profile, UserKind::Agent);
            }
            VisitorEvent::VisitorData(profile) => {
                self.upsert_profile(profile, UserKind::Visitor);
            }
            VisitorEvent::StatusChanged(status) => self.set_status(status),
            VisitorEvent::TypingIndicator(typing) => self.set_typing(typing.is_typing),
            VisitorEvent::ChatEnded => {
                self.add_closed_notice(Utc::now());
            }
        }
    }

    /// Prepend a message, freezing its author as the roster has it now.
    ///
    /// Repeated ids are not deduplicated. A missing or unknown author leaves
    /// the snapshot empty; a missing or out-of-range timestamp becomes the
    /// arrival time.
    pub fn add_message(&mut self, payload: &NewMessage) -> &Message {
        let created_at = payload
            .timestamp
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or_else(|| {
                debug!(timestamp = ?payload.timestamp, "Message timestamp unusable, using arrival time");
                Utc::now()
            });

        let author = payload
            .author_id
            .as_ref()
            .and_then(|id| self.users.get(id))
            .cloned();
        if author.is_none() {
            debug!(author_id = ?payload.author_id, message_id = %payload.id, "Message author not in roster");
        }

        self.prepend(Message {
            id: payload.id.clone(),
            text: payload.text.clone(),
            created_at,
            author_id: payload.author_id.clone(),
            author,
        })
    }

    pub fn upsert_profile(&mut self, profile: &UserProfile, kind: UserKind) -> UpsertOutcome {
        self.users.upsert(User::from_profile(profile, kind))
    }

    /// Last write wins.
    pub fn set_status(&mut self, status: &StatusChanged) {
        self.is_online = status.is_online();
    }

    pub fn set_typing(&mut self, is_typing: bool) {
        self.typing_caption = is_typing.then(|| TYPING_CAPTION.to_string());
    }

    /// Prepend the "Chat is closed" notice from the system user.
    pub fn add_closed_notice(&mut self, at: DateTime<Utc>) -> &Message {
        let system = self.users.system().clone();
        self.prepend(Message {
            id: MessageId::generate(),
            text: CHAT_CLOSED_TEXT.to_string(),
            created_at: at,
            author_id: Some(system.id.clone()),
            author: Some(system),
        })
    }

    fn prepend(&mut self, message: Message) -> &Message {
        self.messages.push_front(message);
        &self.messages[0]
    }

    // -- Accessors --

    /// Messages, newest first.
    pub fn messages(&self) -> impl DoubleEndedIterator<Item = &Message> + ExactSizeIterator {
        self.messages.iter()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn users(&self) -> &Roster {
        &self.users
    }

    pub fn visitor(&self) -> Option<&User> {
        self.users.visitor()
    }

    pub fn is_online(&self) -> bool {
        self.is_online
    }

    pub fn typing_caption(&self) -> Option<&str> {
        self.typing_caption.as_deref()
    }

    /// Pick the host-supplied caption for the current online status.
    pub fn status_caption<'a>(&self, greeting: &'a str, no_agents: &'a str) -> &'a str {
        if self.is_online { greeting } else { no_agents }
    }
}

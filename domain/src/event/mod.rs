//! Inbound visitor-client events
//!
//! Each event the client emits has a wire name (`new_message`,
//! `agent_changed`, ...) and a JSON payload. [`VisitorEvent::decode`] turns
//! the pair into a typed event; [`VisitorEvent::payload`] goes the other way
//! for transcript logging.

use crate::chat::value_objects::{MessageId, UserId};
use crate::core::error::DomainError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `new_message` payload
///
/// Every field is optional on the wire. A missing id is generated, a missing
/// or unreadable timestamp becomes the arrival time, and a missing author
/// renders as the unknown placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    #[serde(default = "MessageId::generate")]
    pub id: MessageId,
    #[serde(default)]
    pub text: String,
    /// Milliseconds since the Unix epoch
    #[serde(
        default,
        deserialize_with = "lenient_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
}

impl NewMessage {
    pub fn new(id: impl Into<MessageId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            timestamp: None,
            author_id: None,
        }
    }

    pub fn with_timestamp(mut self, millis: i64) -> Self {
        self.timestamp = Some(millis);
        self
    }

    pub fn with_author(mut self, author_id: impl Into<UserId>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }
}

/// Accept integer, float or numeric-string milliseconds. Anything else
/// decodes as `None`.
fn lenient_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let millis = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(float_millis)),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().and_then(float_millis),
        _ => None,
    };
    Ok(millis)
}

fn float_millis(f: f64) -> Option<i64> {
    // `as` saturates; out-of-range values are caught when converting to a date
    f.is_finite().then(|| f.trunc() as i64)
}

/// `agent_changed` / `visitor_data` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Role reported by the client (e.g. `"agent"`), used as a name fallback
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserProfile {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            avatar_url: None,
            role: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

/// `status_changed` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChanged {
    pub status: String,
}

impl StatusChanged {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    /// Only the exact status `"online"` counts as online.
    pub fn is_online(&self) -> bool {
        self.status == "online"
    }
}

/// `typing_indicator` payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingIndicator {
    pub is_typing: bool,
}

/// Wire names of the events a chat view subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitorEventKind {
    NewMessage,
    AgentChanged,
    StatusChanged,
    TypingIndicator,
    ChatEnded,
    VisitorData,
}

impl VisitorEventKind {
    /// Every kind, in subscription order.
    pub const ALL: [VisitorEventKind; 6] = [
        Self::NewMessage,
        Self::AgentChanged,
        Self::StatusChanged,
        Self::TypingIndicator,
        Self::ChatEnded,
        Self::VisitorData,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewMessage => "new_message",
            Self::AgentChanged => "agent_changed",
            Self::StatusChanged => "status_changed",
            Self::TypingIndicator => "typing_indicator",
            Self::ChatEnded => "chat_ended",
            Self::VisitorData => "visitor_data",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl std::fmt::Display for VisitorEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed event emitted by the visitor client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitorEvent {
    NewMessage(NewMessage),
    AgentChanged(UserProfile),
    StatusChanged(StatusChanged),
    TypingIndicator(TypingIndicator),
    ChatEnded,
    VisitorData(UserProfile),
}

impl VisitorEvent {
    pub fn kind(&self) -> VisitorEventKind {
        match self {
            Self::NewMessage(_) => VisitorEventKind::NewMessage,
            Self::AgentChanged(_) => VisitorEventKind::AgentChanged,
            Self::StatusChanged(_) => VisitorEventKind::StatusChanged,
            Self::TypingIndicator(_) => VisitorEventKind::TypingIndicator,
            Self::ChatEnded => VisitorEventKind::ChatEnded,
            Self::VisitorData(_) => VisitorEventKind::VisitorData,
        }
    }

    /// Decode an event from its wire name and JSON payload.
    ///
    /// `chat_ended` ignores its payload; every other event requires one.
    pub fn decode(name: &str, data: Option<Value>) -> Result<Self, DomainError> {
        let kind = VisitorEventKind::from_name(name)
            .ok_or_else(|| DomainError::UnknownEvent(name.to_string()))?;
        let data = data.unwrap_or(Value::Null);

        let event = match kind {
            VisitorEventKind::NewMessage => Self::NewMessage(parse(kind, data)?),
            VisitorEventKind::AgentChanged => Self::AgentChanged(parse(kind, data)?),
            VisitorEventKind::StatusChanged => Self::StatusChanged(parse(kind, data)?),
            VisitorEventKind::TypingIndicator => Self::TypingIndicator(parse(kind, data)?),
            VisitorEventKind::ChatEnded => Self::ChatEnded,
            VisitorEventKind::VisitorData => Self::VisitorData(parse(kind, data)?),
        };
        Ok(event)
    }

    /// JSON payload of the event, in wire shape.
    pub fn payload(&self) -> Value {
        let value = match self {
            Self::NewMessage(p) => serde_json::to_value(p),
            Self::AgentChanged(p) | Self::VisitorData(p) => serde_json::to_value(p),
            Self::StatusChanged(p) => serde_json::to_value(p),
            Self::TypingIndicator(p) => serde_json::to_value(p),
            Self::ChatEnded => return Value::Object(Default::default()),
        };
        value.unwrap_or(Value::Null)
    }
}

fn parse<T: DeserializeOwned>(kind: VisitorEventKind, data: Value) -> Result<T, DomainError> {
    serde_json::from_value(data).map_err(|source| DomainError::MalformedPayload {
        event: kind.as_str(),
        source,
    })
}

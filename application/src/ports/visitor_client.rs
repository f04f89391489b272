//! Visitor client port
//!
//! Defines the interface of the external messaging client that brokers the
//! visitor-to-agent connection. The chat view only subscribes to its events
//! and forwards user actions to it; transport, presence and delivery live on
//! the other side of this trait.

use chatview_domain::{VisitorEvent, VisitorEventKind};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during visitor client operations
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Visitor client disconnected")]
    Disconnected,

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Cannot subscribe to {event}: {reason}")]
    Subscription {
        event: VisitorEventKind,
        reason: String,
    },
}

/// Callback invoked with every event of the kind it was registered for
pub type Listener = Box<dyn Fn(VisitorEvent) + Send + Sync>;

/// Handle of a registered listener, used to deregister it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// `sendMessage` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    /// Correlation id chosen by the sender
    pub custom_id: String,
    pub text: String,
}

impl OutgoingMessage {
    /// A message with a freshly generated correlation id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            custom_id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
        }
    }
}

/// `setSneakPeek` request: live preview of unsent visitor text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SneakPeek {
    pub text: String,
}

/// Messaging client shared by a chat view
///
/// Outbound calls are fire-and-forget: they return once the request is
/// handed off, never waiting for delivery.
pub trait VisitorClient: Send + Sync {
    /// Register a listener for one event kind.
    fn on(&self, kind: VisitorEventKind, listener: Listener) -> Result<ListenerId, ClientError>;

    /// Deregister a listener. Unknown ids are ignored.
    fn off(&self, id: ListenerId);

    fn send_message(&self, message: OutgoingMessage) -> Result<(), ClientError>;

    fn set_sneak_peek(&self, peek: SneakPeek) -> Result<(), ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outgoing_message_wire_shape() {
        let message = OutgoingMessage {
            custom_id: "c1".to_string(),
            text: "hello".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({"customId": "c1", "text": "hello"})
        );
    }

    #[test]
    fn test_outgoing_message_ids_are_fresh() {
        let a = OutgoingMessage::new("x");
        let b = OutgoingMessage::new("x");
        assert_ne!(a.custom_id, b.custom_id);
    }

    #[test]
    fn test_subscription_error_display() {
        let err = ClientError::Subscription {
            event: VisitorEventKind::ChatEnded,
            reason: "closed".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot subscribe to chat_ended: closed");
    }
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown visitor event: {0}")]
    UnknownEvent(String),

    #[error("Malformed {event} payload: {source}")]
    MalformedPayload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl DomainError {
    /// Check if this error was caused by an event name nobody subscribes to
    pub fn is_unknown_event(&self) -> bool {
        matches!(self, DomainError::UnknownEvent(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_event_display() {
        let error = DomainError::UnknownEvent("agent_left".to_string());
        assert_eq!(error.to_string(), "Unknown visitor event: agent_left");
    }

    #[test]
    fn test_is_unknown_event_check() {
        assert!(DomainError::UnknownEvent("x".to_string()).is_unknown_event());

        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let malformed = DomainError::MalformedPayload {
            event: "new_message",
            source,
        };
        assert!(!malformed.is_unknown_event());
        assert!(malformed.to_string().starts_with("Malformed new_message payload"));
    }
}

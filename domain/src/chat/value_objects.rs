//! Chat value objects - immutable identifiers and classifiers.
//!
//! # Identifiers
//! - [`UserId`] - roster key of a user (`"system"` is reserved)
//! - [`MessageId`] - identity of a message row
//!
//! # Classifiers
//! - [`UserKind`] - system, agent or visitor

use serde::{Deserialize, Serialize};

/// Roster key of a user.
///
/// The id `"system"` is reserved for the seeded system user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Id of the seeded system user.
    pub const SYSTEM: &'static str = "system";

    /// Creates a UserId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The reserved id of the system user.
    pub fn system() -> Self {
        Self(Self::SYSTEM.to_string())
    }

    /// Returns true for the reserved system id.
    pub fn is_system(&self) -> bool {
        self.0 == Self::SYSTEM
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a message row.
///
/// Ids come from the visitor client; synthetic rows (e.g. the chat-closed
/// notice) get a freshly generated one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Creates a MessageId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new unique MessageId.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a roster entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    System,
    Agent,
    Visitor,
}

impl UserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Agent => "agent",
            Self::Visitor => "visitor",
        }
    }

    /// Display name used when a profile carries no name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Agent => "Agent",
            Self::Visitor => "Visitor",
        }
    }
}

impl std::fmt::Display for UserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalize an avatar address to an absolute `https://` URL.
///
/// Visitor clients usually report avatars without a scheme
/// (`cdn.example.com/a.png`). Plain `http://` is upgraded, protocol-relative
/// `//host/...` gets the scheme prepended. Blank input yields `None`.
pub fn normalize_avatar_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.starts_with("https://") {
        return Some(raw.to_string());
    }
    if let Some(rest) = raw.strip_prefix("http://") {
        return Some(format!("https://{rest}"));
    }
    if let Some(rest) = raw.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    Some(format!("https://{raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_user_id() {
        assert!(UserId::system().is_system());
        assert!(!UserId::new("a1").is_system());
        assert_eq!(UserId::system().as_str(), "system");
    }

    #[test]
    fn test_generated_message_ids_are_unique() {
        let a = MessageId::generate();
        let b = MessageId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_user_kind_labels() {
        assert_eq!(UserKind::Agent.label(), "Agent");
        assert_eq!(UserKind::Visitor.label(), "Visitor");
        assert_eq!(UserKind::System.to_string(), "system");
    }

    #[test]
    fn test_normalize_avatar_url() {
        assert_eq!(
            normalize_avatar_url("cdn.example.com/a.png").as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(
            normalize_avatar_url("http://cdn.example.com/a.png").as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(
            normalize_avatar_url("//cdn.example.com/a.png").as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(
            normalize_avatar_url("https://cdn.example.com/a.png").as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(normalize_avatar_url("   "), None);
    }

    #[test]
    fn test_user_id_serde_is_transparent() {
        let id: UserId = serde_json::from_str("\"v1\"").unwrap();
        assert_eq!(id, UserId::new("v1"));
    }
}

//! Chat entities

use super::session::UNKNOWN_AUTHOR;
use super::value_objects::{MessageId, UserId, UserKind, normalize_avatar_url};
use crate::event::UserProfile;
use chrono::{DateTime, Utc};

/// A roster entry (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub kind: UserKind,
    pub display_name: String,
    /// Absolute `https://` address, already normalized
    pub avatar_url: Option<String>,
}

impl User {
    /// The seeded system user.
    pub fn system() -> Self {
        Self {
            id: UserId::system(),
            kind: UserKind::System,
            display_name: UserKind::System.label().to_string(),
            avatar_url: None,
        }
    }

    /// Build a user of the given kind from a client profile.
    ///
    /// The display name falls back to the profile's reported role, then to
    /// the kind's label.
    pub fn from_profile(profile: &UserProfile, kind: UserKind) -> Self {
        let display_name = non_blank(profile.name.as_deref())
            .or_else(|| non_blank(profile.role.as_deref()))
            .unwrap_or_else(|| kind.label())
            .to_string();

        Self {
            id: profile.id.clone(),
            kind,
            display_name,
            avatar_url: profile
                .avatar_url
                .as_deref()
                .and_then(normalize_avatar_url),
        }
    }

    pub fn is_visitor(&self) -> bool {
        self.kind == UserKind::Visitor
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// A row in the message log (Entity)
///
/// `author` is the roster entry as it was when the message arrived; later
/// roster updates do not touch it. `None` means the author was unknown.
/// `author_id` is `None` when the payload named no author at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub author_id: Option<UserId>,
    pub author: Option<User>,
}

impl Message {
    pub fn author_kind(&self) -> Option<UserKind> {
        self.author.as_ref().map(|u| u.kind)
    }

    pub fn is_system(&self) -> bool {
        self.author_kind() == Some(UserKind::System)
    }

    pub fn is_authored_by(&self, id: &UserId) -> bool {
        self.author_id.as_ref() == Some(id)
    }

    /// Display name of the author snapshot, or the placeholder identity.
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|u| u.display_name.as_str())
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    pub fn author_avatar(&self) -> Option<&str> {
        self.author.as_ref().and_then(|u| u.avatar_url.as_deref())
    }
}

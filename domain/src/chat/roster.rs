//! User roster
//!
//! An owned map from [`UserId`] to [`User`] with explicit upsert rules:
//!
//! - the `system` entry is seeded at construction and can never be replaced
//! - at most one visitor is held; a visitor with a new id replaces the old one
//! - any other upsert inserts or overwrites by id

use super::entities::User;
use super::value_objects::{UserId, UserKind};
use std::collections::BTreeMap;
use tracing::warn;

/// Result of [`Roster::upsert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new id was added
    Inserted,
    /// An existing entry with the same id was overwritten
    Updated,
    /// The previous visitor (with a different id) was removed to make room
    ReplacedVisitor { previous: UserId },
    /// Targeted the reserved system entry; nothing changed
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    system: User,
    users: BTreeMap<UserId, User>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            system: User::system(),
            users: BTreeMap::new(),
        }
    }
}

impl Roster {
    /// A roster holding only the system user.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn system(&self) -> &User {
        &self.system
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        if id.is_system() {
            Some(&self.system)
        } else {
            self.users.get(id)
        }
    }

    /// The current visitor, if a profile has been resolved.
    pub fn visitor(&self) -> Option<&User> {
        self.users.values().find(|u| u.is_visitor())
    }

    pub fn upsert(&mut self, user: User) -> UpsertOutcome {
        if user.id.is_system() || user.kind == UserKind::System {
            warn!(user_id = %user.id, kind = %user.kind, "Ignoring upsert of reserved system user");
            return UpsertOutcome::Rejected;
        }

        let mut replaced = None;
        if user.is_visitor()
            && let Some(previous) = self
                .visitor()
                .filter(|current| current.id != user.id)
                .map(|current| current.id.clone())
        {
            self.users.remove(&previous);
            replaced = Some(previous);
        }

        let existed = self.users.insert(user.id.clone(), user).is_some();
        match (replaced, existed) {
            (Some(previous), _) => UpsertOutcome::ReplacedVisitor { previous },
            (None, true) => UpsertOutcome::Updated,
            (None, false) => UpsertOutcome::Inserted,
        }
    }

    /// All entries, system first, then by id.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        std::iter::once(&self.system).chain(self.users.values())
    }

    pub fn count_kind(&self, kind: UserKind) -> usize {
        self.iter().filter(|u| u.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.users.len() + 1
    }

    /// Always false: the system user is permanent.
    pub fn is_empty(&self) -> bool {
        false
    }
}

//! Domain layer for chatview
//!
//! This crate contains the session state of a single support-chat view and
//! the transitions that inbound visitor-client events apply to it.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Roster**: users known to the session, keyed by id. Always holds the
//!   `system` user and at most one visitor.
//! - **SessionState**: message log (newest first), roster, online flag and
//!   typing caption. Mutated only through [`SessionState::apply`] and the
//!   transition methods it dispatches to.
//! - **VisitorEvent**: the typed events a visitor client emits.

pub mod chat;
pub mod core;
pub mod event;

// Re-export commonly used types
pub use chat::{
    entities::{Message, User},
    roster::{Roster, UpsertOutcome},
    session::{CHAT_CLOSED_TEXT, SessionState, TYPING_CAPTION, UNKNOWN_AUTHOR},
    value_objects::{MessageId, UserId, UserKind, normalize_avatar_url},
};
pub use core::error::DomainError;
pub use event::{
    NewMessage, StatusChanged, TypingIndicator, UserProfile, VisitorEvent, VisitorEventKind,
};

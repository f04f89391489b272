//! Chat session domain
//!
//! - [`value_objects`] - identifiers, user kinds and avatar normalization
//! - [`entities`] - [`User`](entities::User) and [`Message`](entities::Message)
//! - [`roster`] - the user roster with its upsert rules
//! - [`session`] - [`SessionState`](session::SessionState) and its transitions

pub mod entities;
pub mod roster;
pub mod session;
pub mod value_objects;

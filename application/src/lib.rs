//! Application layer for chatview
//!
//! This crate contains the [`ChatView`] use case, the port definitions it
//! talks through, and the host-facing configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatViewConfig;
pub use ports::{
    host::HostApp,
    transcript::{NoTranscript, TranscriptEntry, TranscriptLogger},
    visitor_client::{ClientError, Listener, ListenerId, OutgoingMessage, SneakPeek, VisitorClient},
};
pub use use_cases::{chat_view::ChatView, subscriptions::Subscriptions};

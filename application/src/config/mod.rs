//! Application-level configuration.
//!
//! - [`ChatViewConfig`] - what the host application tells the chat view

pub mod chat_view_config;

pub use chat_view_config::ChatViewConfig;

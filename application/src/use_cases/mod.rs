//! Use cases
//!
//! - [`chat_view`] - the chat view reducer and its outbound handlers
//! - [`subscriptions`] - scoped ownership of the view's event listeners

pub mod chat_view;
pub mod subscriptions;

#[cfg(test)]
pub(crate) mod test_support;

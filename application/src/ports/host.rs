//! Host application port
//!
//! The application embedding the chat view decides what "dismiss" means
//! (pop a screen, quit a terminal loop, ...).

/// Callback surface of the embedding application
pub trait HostApp: Send + Sync {
    /// The chat surface finished its exit transition and should be dismissed.
    fn close_chat(&self);
}

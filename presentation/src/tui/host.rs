//! Terminal host - what "dismiss the chat" means for the terminal app

use chatview_application::HostApp;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// Records that the chat surface asked to be dismissed.
#[derive(Debug, Default)]
pub struct TerminalHost {
    closed: AtomicBool,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl HostApp for TerminalHost {
    fn close_chat(&self) {
        info!("Host dismissing chat surface");
        self.closed.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_chat_sets_flag() {
        let host = TerminalHost::new();
        assert!(!host.is_closed());
        host.close_chat();
        assert!(host.is_closed());
    }
}

//! In-memory visitor client for use case tests

use crate::ports::visitor_client::{
    ClientError, Listener, ListenerId, OutgoingMessage, SneakPeek, VisitorClient,
};
use chatview_domain::{VisitorEvent, VisitorEventKind};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct FakeClient {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, VisitorEventKind, Listener)>>,
    pub sent: Mutex<Vec<OutgoingMessage>>,
    pub peeks: Mutex<Vec<SneakPeek>>,
    /// Subscribing to this kind fails
    pub fail_on: Option<VisitorEventKind>,
    /// Outbound calls fail
    pub offline: bool,
}

impl FakeClient {
    pub fn failing_on(kind: VisitorEventKind) -> Self {
        Self {
            fail_on: Some(kind),
            ..Self::default()
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    /// Deliver an event to every listener of its kind; returns how many ran.
    pub fn emit(&self, event: VisitorEvent) -> usize {
        let listeners = self.listeners.lock().unwrap();
        let mut delivered = 0;
        for (_, kind, listener) in listeners.iter() {
            if *kind == event.kind() {
                listener(event.clone());
                delivered += 1;
            }
        }
        delivered
    }
}

impl VisitorClient for FakeClient {
    fn on(&self, kind: VisitorEventKind, listener: Listener) -> Result<ListenerId, ClientError> {
        if self.fail_on == Some(kind) {
            return Err(ClientError::Subscription {
                event: kind,
                reason: "refused".to_string(),
            });
        }
        let id = ListenerId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().unwrap().push((id, kind, listener));
        Ok(id)
    }

    fn off(&self, id: ListenerId) {
        self.listeners.lock().unwrap().retain(|(lid, _, _)| *lid != id);
    }

    fn send_message(&self, message: OutgoingMessage) -> Result<(), ClientError> {
        if self.offline {
            return Err(ClientError::Disconnected);
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }

    fn set_sneak_peek(&self, peek: SneakPeek) -> Result<(), ClientError> {
        if self.offline {
            return Err(ClientError::Disconnected);
        }
        self.peeks.lock().unwrap().push(peek);
        Ok(())
    }
}

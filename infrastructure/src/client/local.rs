//! In-process visitor client
//!
//! Stands in for a vendor messaging SDK: listeners are kept in a table keyed
//! by [`ListenerId`], [`emit`](LocalVisitorClient::emit) fans an event out to
//! every listener of its kind, and outbound calls are recorded. With echo
//! enabled, a sent message comes back as `new_message` authored by the
//! configured visitor, the way a live backend confirms delivery.

use chatview_application::{
    ClientError, Listener, ListenerId, OutgoingMessage, SneakPeek, VisitorClient,
};
use chatview_domain::{NewMessage, UserId, VisitorEvent, VisitorEventKind};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use tracing::{debug, trace};

type SharedListener = Arc<dyn Fn(VisitorEvent) + Send + Sync>;

struct Registration {
    id: ListenerId,
    kind: VisitorEventKind,
    listener: SharedListener,
}

pub struct LocalVisitorClient {
    next_id: AtomicU64,
    /// Registration order is dispatch order.
    ///
    /// Uses `std::sync::RwLock` so [`off`](VisitorClient::off) can run from
    /// a `Drop` impl.
    listeners: RwLock<Vec<Registration>>,
    connected: AtomicBool,
    echo_as: Option<UserId>,
    sent: Mutex<Vec<OutgoingMessage>>,
    last_peek: Mutex<Option<SneakPeek>>,
}

impl Default for LocalVisitorClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalVisitorClient {
    /// A connected client that does not echo sent messages.
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            listeners: RwLock::new(Vec::new()),
            connected: AtomicBool::new(true),
            echo_as: None,
            sent: Mutex::new(Vec::new()),
            last_peek: Mutex::new(None),
        }
    }

    /// Echo every sent message back as `new_message` authored by `visitor`.
    pub fn with_echo(mut self, visitor: impl Into<UserId>) -> Self {
        self.echo_as = Some(visitor.into());
        self
    }

    /// Deliver an event to every listener registered for its kind.
    ///
    /// Listeners are invoked after the table lock is released, so a listener
    /// may deregister itself. Returns the number of listeners invoked.
    pub fn emit(&self, event: VisitorEvent) -> usize {
        let kind = event.kind();
        let targets: Vec<SharedListener> = {
            let listeners = self.listeners.read().unwrap_or_else(|e| e.into_inner());
            listeners
                .iter()
                .filter(|r| r.kind == kind)
                .map(|r| Arc::clone(&r.listener))
                .collect()
        };

        trace!(event = %kind, listeners = targets.len(), "Emitting visitor event");
        for listener in &targets {
            listener(event.clone());
        }
        targets.len()
    }

    /// Simulate a dropped connection; outbound calls fail afterwards.
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn sent_messages(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn last_sneak_peek(&self) -> Option<SneakPeek> {
        self.last_peek
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn ensure_connected(&self) -> Result<(), ClientError> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(ClientError::Disconnected)
        }
    }
}

impl VisitorClient for LocalVisitorClient {
    fn on(&self, kind: VisitorEventKind, listener: Listener) -> Result<ListenerId, ClientError> {
        let id = ListenerId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.listeners
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(Registration {
                id,
                kind,
                listener: Arc::from(listener),
            });
        trace!(event = %kind, id = id.raw(), "Listener registered");
        Ok(id)
    }

    fn off(&self, id: ListenerId) {
        self.listeners
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|r| r.id != id);
        trace!(id = id.raw(), "Listener deregistered");
    }

    fn send_message(&self, message: OutgoingMessage) -> Result<(), ClientError> {
        self.ensure_connected()?;
        debug!(custom_id = %message.custom_id, "sendMessage");

        let echo = self.echo_as.as_ref().map(|author| {
            VisitorEvent::NewMessage(
                NewMessage::new(message.custom_id.clone(), message.text.clone())
                    .with_timestamp(chrono::Utc::now().timestamp_millis())
                    .with_author(author.clone()),
            )
        });

        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message);

        if let Some(event) = echo {
            self.emit(event);
        }
        Ok(())
    }

    fn set_sneak_peek(&self, peek: SneakPeek) -> Result<(), ClientError> {
        self.ensure_connected()?;
        trace!(len = peek.text.len(), "setSneakPeek");
        *self.last_peek.lock().unwrap_or_else(|e| e.into_inner()) = Some(peek);
        Ok(())
    }
}

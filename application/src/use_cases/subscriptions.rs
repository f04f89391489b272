//! Scoped ownership of a chat view's event listeners
//!
//! [`Subscriptions::attach`] registers one listener per [`VisitorEventKind`];
//! every listener only forwards its event into a channel owned by the view.
//! Dropping the guard deregisters whatever was registered, including when
//! attachment fails partway through.

use crate::ports::visitor_client::{ClientError, ListenerId, VisitorClient};
use chatview_domain::{VisitorEvent, VisitorEventKind};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

pub struct Subscriptions {
    client: Arc<dyn VisitorClient>,
    ids: Vec<ListenerId>,
}

impl Subscriptions {
    /// Subscribe to every event kind, forwarding events into `tx`.
    pub fn attach(
        client: Arc<dyn VisitorClient>,
        tx: mpsc::UnboundedSender<VisitorEvent>,
    ) -> Result<Self, ClientError> {
        let mut subscriptions = Self {
            client: Arc::clone(&client),
            ids: Vec::with_capacity(VisitorEventKind::ALL.len()),
        };

        for kind in VisitorEventKind::ALL {
            let tx = tx.clone();
            // On error the partially filled guard drops and releases what it holds
            let id = client.on(
                kind,
                Box::new(move |event| {
                    if tx.send(event).is_err() {
                        trace!(event = %kind, "Chat view gone, dropping event");
                    }
                }),
            )?;
            subscriptions.ids.push(id);
        }

        debug!(count = subscriptions.ids.len(), "Visitor client listeners attached");
        Ok(subscriptions)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Deregister every listener now. Idempotent.
    pub fn release(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        for id in self.ids.drain(..) {
            self.client.off(id);
        }
        debug!("Visitor client listeners released");
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.release();
    }
}

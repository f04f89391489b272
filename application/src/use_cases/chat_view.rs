//! Chat view use case
//!
//! [`ChatView`] owns the [`SessionState`] of one mounted chat surface. Inbound
//! events arrive through listeners registered by [`Subscriptions`] and are
//! queued on a channel; the view applies them one at a time on whichever task
//! owns it, so handlers always run to completion and never overlap.
//!
//! ```text
//! VisitorClient ──listener──> mpsc ──next_event()/drain()──> apply() ──> SessionState
//!       ^                                                                   │
//!       └──── send_message / set_sneak_peek <── on_send_requested ──── render
//! ```

use super::subscriptions::Subscriptions;
use crate::config::ChatViewConfig;
use crate::ports::host::HostApp;
use crate::ports::transcript::{NoTranscript, TranscriptEntry, TranscriptLogger};
use crate::ports::visitor_client::{ClientError, OutgoingMessage, SneakPeek, VisitorClient};
use chatview_domain::{
    NewMessage, SessionState, StatusChanged, TypingIndicator, User, UserProfile, VisitorEvent,
};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct ChatView {
    client: Arc<dyn VisitorClient>,
    config: ChatViewConfig,
    state: SessionState,
    events: mpsc::UnboundedReceiver<VisitorEvent>,
    subscriptions: Subscriptions,
    transcript: Arc<dyn TranscriptLogger>,
}

impl ChatView {
    /// Mount a chat view: seed an empty session and subscribe to every event.
    pub fn attach(
        client: Arc<dyn VisitorClient>,
        config: ChatViewConfig,
    ) -> Result<Self, ClientError> {
        let (tx, events) = mpsc::unbounded_channel();
        let subscriptions = Subscriptions::attach(Arc::clone(&client), tx)?;

        info!(
            license = config.license,
            title = %config.chat_title,
            "Chat view attached"
        );

        Ok(Self {
            client,
            config,
            state: SessionState::new(),
            events,
            subscriptions,
            transcript: Arc::new(NoTranscript),
        })
    }

    pub fn with_transcript(mut self, transcript: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = transcript;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &ChatViewConfig {
        &self.config
    }

    /// The user whose messages render as "own" messages.
    pub fn visitor(&self) -> Option<&User> {
        self.state.visitor()
    }

    /// Greeting while online, the no-agents notice otherwise.
    pub fn status_caption(&self) -> &str {
        self.state
            .status_caption(&self.config.greeting, &self.config.no_agents)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    // ==================== Inbound ====================

    /// Wait for the next queued event without applying it.
    ///
    /// Cancel-safe, so it can sit in a `select!` arm. Returns `None` only if
    /// every sender is gone, which cannot happen while the view is attached.
    pub async fn next_event(&mut self) -> Option<VisitorEvent> {
        self.events.recv().await
    }

    /// Apply every event queued so far. Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Reducer entry point. Every inbound event, whether it came off the
    /// channel or through one of the `on_*` handlers, passes through here
    /// and on to [`SessionState::apply`].
    pub fn apply(&mut self, event: VisitorEvent) {
        debug!(event = %event.kind(), "Applying visitor event");
        self.transcript.log(TranscriptEntry::new(
            "inbound",
            serde_json::json!({
                "event": event.kind().as_str(),
                "data": event.payload(),
            }),
        ));

        self.state.apply(&event);

        if event == VisitorEvent::ChatEnded {
            info!("Chat ended by visitor client");
        }
    }

    pub fn on_new_message(&mut self, payload: NewMessage) {
        self.apply(VisitorEvent::NewMessage(payload));
    }

    pub fn on_agent_joined(&mut self, profile: UserProfile) {
        self.apply(VisitorEvent::AgentChanged(profile));
    }

    pub fn on_visitor_profile(&mut self, profile: UserProfile) {
        self.apply(VisitorEvent::VisitorData(profile));
    }

    pub fn on_status_changed(&mut self, status: StatusChanged) {
        self.apply(VisitorEvent::StatusChanged(status));
    }

    pub fn on_typing_indicator(&mut self, is_typing: bool) {
        self.apply(VisitorEvent::TypingIndicator(TypingIndicator { is_typing }));
    }

    pub fn on_chat_ended(&mut self) {
        self.apply(VisitorEvent::ChatEnded);
    }

    // ==================== Outbound ====================

    /// Forward a submitted message to the client.
    ///
    /// Local state is untouched; the message shows up once the client echoes
    /// it back as `new_message`. Blank text is not sent. Returns the
    /// correlation id of the forwarded message.
    pub fn on_send_requested(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let message = OutgoingMessage::new(text);
        let custom_id = message.custom_id.clone();
        self.transcript.log(TranscriptEntry::new(
            "send_message",
            serde_json::to_value(&message).unwrap_or_default(),
        ));

        if let Err(e) = self.client.send_message(message) {
            warn!(custom_id = %custom_id, "Send failed, message dropped: {}", e);
        }
        Some(custom_id)
    }

    /// Forward the in-progress input as a sneak peek. Fire-and-forget.
    pub fn on_input_changed(&self, text: &str) {
        let peek = SneakPeek {
            text: text.to_string(),
        };
        self.transcript.log(TranscriptEntry::new(
            "sneak_peek",
            serde_json::to_value(&peek).unwrap_or_default(),
        ));

        if let Err(e) = self.client.set_sneak_peek(peek) {
            warn!("Sneak peek failed: {}", e);
        }
    }

    // ==================== Lifecycle ====================

    /// Play the exit transition, detach, then tell the host to dismiss.
    ///
    /// Consumes the view, so a second close cannot overlap the first.
    pub async fn close<F>(mut self, transition: F, host: &dyn HostApp)
    where
        F: Future<Output = ()>,
    {
        transition.await;
        self.subscriptions.release();
        info!("Chat view closed");
        host.close_chat();
    }
}

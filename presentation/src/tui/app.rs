//! TUI application - main loop
//!
//! Architecture:
//! ```text
//! ChatApp (select! loop)
//!   ├─ crossterm EventStream ──> KeyHandler ──> handle_action ──> ChatView outbound
//!   ├─ chat_view.next_event() ──> ChatView::apply (+ drain)
//!   └─ tick_interval (redraw)
//! ```
//!
//! On close the app hands the view an exit transition that animates a
//! snapshot of the last frame, then restores the terminal.

use super::host::TerminalHost;
use super::keys::{Action, KeyHandler};
use super::state::TuiState;
use super::transition::ExitTransition;
use super::widgets::ChatScreen;
use chatview_application::{ChatView, ChatViewConfig};
use chatview_domain::SessionState;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, widgets::Widget};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Lines moved per scroll key press
const SCROLL_STEP: usize = 3;

/// Terminal behaviour knobs
#[derive(Debug, Clone, Copy)]
pub struct TuiOptions {
    pub exit_transition: ExitTransition,
    pub tick: Duration,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            exit_transition: ExitTransition::from_millis(500),
            tick: Duration::from_millis(250),
        }
    }
}

/// Main TUI application
pub struct ChatApp {
    view: ChatView,
    host: Arc<TerminalHost>,
    options: TuiOptions,
    state: TuiState,
}

impl ChatApp {
    pub fn new(view: ChatView, host: Arc<TerminalHost>, options: TuiOptions) -> Self {
        Self {
            view,
            host,
            options,
            state: TuiState::new(),
        }
    }

    pub fn view(&self) -> &ChatView {
        &self.view
    }

    pub fn tui_state(&self) -> &TuiState {
        &self.state
    }

    /// Run the TUI main loop until the user closes the chat.
    pub async fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        if result.is_ok() {
            let Self {
                view,
                host,
                options,
                state,
            } = self;
            let snapshot = view.state().clone();
            let config = view.config().clone();
            let terminal_ref = &mut terminal;
            let transition = async move {
                if let Err(e) = play_exit_transition(
                    terminal_ref,
                    &snapshot,
                    &config,
                    &state,
                    options.exit_transition,
                )
                .await
                {
                    warn!("Exit transition failed: {}", e);
                }
            };
            view.close(transition, host.as_ref()).await;
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.options.tick);

        loop {
            let mut scroll_limit = 0;
            terminal.draw(|frame| {
                let screen = ChatScreen::new(self.view.state(), self.view.config(), &self.state);
                scroll_limit = screen.max_scroll(frame.area());
                frame.render_widget(screen, frame.area());
            })?;
            self.state.set_scroll_limit(scroll_limit);

            if self.state.should_close {
                return Ok(());
            }

            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(term_event)) => self.handle_terminal_event(term_event),
                        Some(Err(e)) => return Err(e),
                        // Input closed: nothing left to drive the chat
                        None => self.state.should_close = true,
                    }
                }

                Some(event) = self.view.next_event() => {
                    self.view.apply(event);
                    self.view.drain();
                }

                _ = tick.tick() => {}
            }
        }
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let action = KeyHandler::handle(key);
                self.handle_action(action);
            }
            Event::Paste(text) => {
                // Single-line input: newlines and other controls are dropped
                for c in text.chars().filter(|c| !c.is_control()) {
                    self.handle_action(Action::InsertChar(c));
                }
            }
            Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Apply a key action to the TUI state and forward it to the chat view.
    pub fn handle_action(&mut self, action: Action) {
        if action.edits_input() {
            if self.edit_input(action) {
                self.view.on_input_changed(&self.state.input);
            }
            return;
        }

        match action {
            Action::None | Action::InsertChar(_) | Action::DeleteChar => {}

            Action::CursorLeft => self.state.cursor_left(),
            Action::CursorRight => self.state.cursor_right(),
            Action::CursorStart => self.state.cursor_home(),
            Action::CursorEnd => self.state.cursor_end(),

            Action::Submit => {
                let text = self.state.take_input();
                if let Some(custom_id) = self.view.on_send_requested(&text) {
                    debug!(custom_id = %custom_id, "Message submitted");
                    self.state.follow();
                    self.view.on_input_changed("");
                } else {
                    // Blank input stays in the box untouched
                    self.state.input = text;
                    self.state.cursor_end();
                }
            }

            Action::ScrollUp => self.state.scroll_up(SCROLL_STEP),
            Action::ScrollDown => self.state.scroll_down(SCROLL_STEP),

            Action::Close => self.state.should_close = true,
        }
    }

    /// Returns whether the input text changed.
    fn edit_input(&mut self, action: Action) -> bool {
        match action {
            Action::InsertChar(c) => {
                self.state.insert_char(c);
                true
            }
            Action::DeleteChar => self.state.delete_char(),
            _ => false,
        }
    }
}

/// Draw the collapsing surface frame by frame over `transition`'s duration.
async fn play_exit_transition<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &SessionState,
    config: &ChatViewConfig,
    tui: &TuiState,
    transition: ExitTransition,
) -> io::Result<()> {
    let mut interval = tokio::time::interval(transition.frame_interval());

    for frame_index in 0..transition.frame_count() {
        interval.tick().await;
        terminal.draw(|frame| {
            let area = transition.visible_area(frame.area(), frame_index);
            ChatScreen::new(session, config, tui).render(area, frame.buffer_mut());
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatview_application::{ClientError, Listener, ListenerId, OutgoingMessage, SneakPeek, VisitorClient};
    use chatview_domain::VisitorEventKind;
    use ratatui::backend::TestBackend;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClient {
        sent: Mutex<Vec<String>>,
        peeks: Mutex<Vec<String>>,
        next_id: Mutex<u64>,
    }

    impl VisitorClient for RecordingClient {
        fn on(&self, _kind: VisitorEventKind, _listener: Listener) -> Result<ListenerId, ClientError> {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            Ok(ListenerId::new(*next))
        }

        fn off(&self, _id: ListenerId) {}

        fn send_message(&self, message: OutgoingMessage) -> Result<(), ClientError> {
            self.sent.lock().unwrap().push(message.text);
            Ok(())
        }

        fn set_sneak_peek(&self, peek: SneakPeek) -> Result<(), ClientError> {
            self.peeks.lock().unwrap().push(peek.text);
            Ok(())
        }
    }

    fn app(client: &Arc<RecordingClient>) -> ChatApp {
        let view = ChatView::attach(client.clone(), ChatViewConfig::default()).unwrap();
        ChatApp::new(view, Arc::new(TerminalHost::new()), TuiOptions::default())
    }

    fn type_text(app: &mut ChatApp, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::InsertChar(c));
        }
    }

    #[test]
    fn test_typing_forwards_sneak_peeks() {
        let client = Arc::new(RecordingClient::default());
        let mut app = app(&client);

        type_text(&mut app, "hi");
        app.handle_action(Action::DeleteChar);

        assert_eq!(*client.peeks.lock().unwrap(), vec!["h", "hi", "h"]);
        assert_eq!(app.tui_state().input, "h");
    }

    #[test]
    fn test_submit_sends_and_clears_input() {
        let client = Arc::new(RecordingClient::default());
        let mut app = app(&client);

        type_text(&mut app, "hello");
        app.handle_action(Action::ScrollUp);
        app.handle_action(Action::Submit);

        assert_eq!(*client.sent.lock().unwrap(), vec!["hello"]);
        assert_eq!(client.peeks.lock().unwrap().last().map(String::as_str), Some(""));
        assert!(app.tui_state().input.is_empty());
        assert_eq!(app.tui_state().scroll_offset, 0);
        // Sending never touches session state
        assert_eq!(app.view().state().message_count(), 0);
    }

    #[test]
    fn test_blank_submit_keeps_input() {
        let client = Arc::new(RecordingClient::default());
        let mut app = app(&client);

        type_text(&mut app, "  ");
        app.handle_action(Action::Submit);

        assert!(client.sent.lock().unwrap().is_empty());
        assert_eq!(app.tui_state().input, "  ");
    }

    #[test]
    fn test_cursor_moves_do_not_forward_peeks() {
        let client = Arc::new(RecordingClient::default());
        let mut app = app(&client);

        type_text(&mut app, "ab");
        app.handle_action(Action::CursorLeft);
        app.handle_action(Action::CursorStart);
        app.handle_action(Action::DeleteChar);

        // Backspace at the start changes nothing, so no peek either
        assert_eq!(*client.peeks.lock().unwrap(), vec!["a", "ab"]);
    }

    #[test]
    fn test_paste_inserts_without_control_characters() {
        let client = Arc::new(RecordingClient::default());
        let mut app = app(&client);

        app.handle_terminal_event(Event::Paste("hi\nyou".to_string()));

        assert_eq!(app.tui_state().input, "hiyou");
        assert_eq!(
            client.peeks.lock().unwrap().last().map(String::as_str),
            Some("hiyou")
        );
        assert!(client.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_close_action_sets_flag() {
        let client = Arc::new(RecordingClient::default());
        let mut app = app(&client);

        app.handle_action(Action::Close);
        assert!(app.tui_state().should_close);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exit_transition_draws_frames() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let session = SessionState::new();
        let config = ChatViewConfig::default();
        let tui = TuiState::new();

        play_exit_transition(
            &mut terminal,
            &session,
            &config,
            &tui,
            ExitTransition::from_millis(120),
        )
        .await
        .unwrap();

        // Last frame renders only the bottom third of the surface
        let buffer = terminal.backend().buffer();
        let top_row: String = (0..40u16).map(|x| buffer[(x, 0)].symbol()).collect();
        assert!(top_row.trim().is_empty());
    }
}

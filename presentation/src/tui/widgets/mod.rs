//! TUI widgets - ratatui components for the chat screen
//!
//! Layout:
//! ┌── NavigationBar (3) ─────────────────────────────┐
//! ├── StatusLine (1) ────────────────────────────────┤
//! ├── MessageList (flex) ────────────────────────────┤
//! ├── TypingFooter (1) ──────────────────────────────┤
//! └── Input (3) ─────────────────────────────────────┘

pub mod input;
pub mod message_list;
pub mod navigation_bar;
pub mod status_line;
pub mod typing_footer;

use crate::tui::state::TuiState;
use chatview_application::ChatViewConfig;
use chatview_domain::SessionState;
use input::InputWidget;
use message_list::MessageListWidget;
use navigation_bar::NavigationBarWidget;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};
use status_line::StatusLineWidget;
use typing_footer::TypingFooterWidget;

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub navigation: Rect,
    pub status: Rect,
    pub messages: Rect,
    pub typing: Rect,
    pub input: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area);

        Self {
            navigation: vertical[0],
            status: vertical[1],
            messages: vertical[2],
            typing: vertical[3],
            input: vertical[4],
        }
    }
}

/// The whole chat surface.
///
/// Renders nothing when the host has the chat turned off.
pub struct ChatScreen<'a> {
    session: &'a SessionState,
    config: &'a ChatViewConfig,
    tui: &'a TuiState,
}

impl<'a> ChatScreen<'a> {
    pub fn new(session: &'a SessionState, config: &'a ChatViewConfig, tui: &'a TuiState) -> Self {
        Self {
            session,
            config,
            tui,
        }
    }

    /// How far the message list can scroll up when the screen fills `area`.
    pub fn max_scroll(&self, area: Rect) -> usize {
        if !self.config.is_chat_on {
            return 0;
        }
        MessageListWidget::new(self.session).max_scroll(MainLayout::compute(area).messages)
    }
}

impl<'a> Widget for ChatScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.config.is_chat_on {
            return;
        }

        let layout = MainLayout::compute(area);

        NavigationBarWidget::new(&self.config.chat_title).render(layout.navigation, buf);
        StatusLineWidget::new(self.session, self.config).render(layout.status, buf);
        MessageListWidget::new(self.session)
            .scroll_offset(self.tui.scroll_offset)
            .render(layout.messages, buf);
        TypingFooterWidget::new(self.session).render(layout.typing, buf);
        InputWidget::new(self.tui).render(layout.input, buf);
    }
}

/// Row-by-row text of a rendered buffer, trailing spaces trimmed.
#[cfg(test)]
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatview_domain::{NewMessage, StatusChanged, UserKind, UserProfile};

    fn session() -> SessionState {
        let mut state = SessionState::new();
        state.upsert_profile(&UserProfile::new("a1").with_name("Bob"), UserKind::Agent);
        state.set_status(&StatusChanged::new("online"));
        state.add_message(
            &NewMessage::new("m1", "How can I help?")
                .with_timestamp(1_000)
                .with_author("a1"),
        );
        state
    }

    #[test]
    fn test_layout_regions() {
        let layout = MainLayout::compute(Rect::new(0, 0, 60, 20));
        assert_eq!(layout.navigation.height, 3);
        assert_eq!(layout.status.y, 3);
        assert_eq!(layout.messages.y, 4);
        assert_eq!(layout.messages.height, 12);
        assert_eq!(layout.typing.y, 16);
        assert_eq!(layout.input.height, 3);
    }

    #[test]
    fn test_screen_renders_all_parts() {
        let session = session();
        let config = ChatViewConfig::default();
        let tui = TuiState::new();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        ChatScreen::new(&session, &config, &tui).render(area, &mut buf);

        let text = buffer_lines(&buf).join("\n");
        assert!(text.contains("Chat with us"));
        assert!(text.contains("Our agents are available now"));
        assert!(text.contains("Bob"));
        assert!(text.contains("How can I help?"));
    }

    #[test]
    fn test_screen_blank_when_chat_off() {
        let session = session();
        let config = ChatViewConfig::default().with_chat_on(false);
        let tui = TuiState::new();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        ChatScreen::new(&session, &config, &tui).render(area, &mut buf);

        assert!(buffer_lines(&buf).iter().all(|line| line.is_empty()));
    }
}

//! Status line widget - greeting while agents are online, notice otherwise

use chatview_application::ChatViewConfig;
use chatview_domain::SessionState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusLineWidget<'a> {
    session: &'a SessionState,
    config: &'a ChatViewConfig,
}

impl<'a> StatusLineWidget<'a> {
    pub fn new(session: &'a SessionState, config: &'a ChatViewConfig) -> Self {
        Self { session, config }
    }
}

impl<'a> Widget for StatusLineWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (dot_color, text_color) = if self.session.is_online() {
            (Color::Green, Color::White)
        } else {
            (Color::DarkGray, Color::Yellow)
        };

        let caption = self
            .session
            .status_caption(&self.config.greeting, &self.config.no_agents);

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled("● ", Style::default().fg(dot_color)),
            Span::styled(caption, Style::default().fg(text_color)),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_lines;
    use chatview_domain::StatusChanged;

    fn render(session: &SessionState) -> String {
        let config = ChatViewConfig::default();
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        StatusLineWidget::new(session, &config).render(area, &mut buf);
        buffer_lines(&buf).remove(0)
    }

    #[test]
    fn test_offline_shows_no_agents() {
        let session = SessionState::new();
        assert!(render(&session).contains("Our agents are not available right now"));
    }

    #[test]
    fn test_online_shows_greeting() {
        let mut session = SessionState::new();
        session.set_status(&StatusChanged::new("online"));
        assert!(render(&session).contains("Our agents are available now"));
    }
}

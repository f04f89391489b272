//! Typing footer widget

use chatview_domain::SessionState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

pub struct TypingFooterWidget<'a> {
    session: &'a SessionState,
}

impl<'a> TypingFooterWidget<'a> {
    pub fn new(session: &'a SessionState) -> Self {
        Self { session }
    }
}

impl<'a> Widget for TypingFooterWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(caption) = self.session.typing_caption() else {
            return;
        };

        Paragraph::new(Span::styled(
            format!(" {}", caption),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_lines;

    #[test]
    fn test_caption_follows_typing_flag() {
        let mut session = SessionState::new();
        let area = Rect::new(0, 0, 30, 1);

        let mut buf = Buffer::empty(area);
        TypingFooterWidget::new(&session).render(area, &mut buf);
        assert_eq!(buffer_lines(&buf)[0], "");

        session.set_typing(true);
        let mut buf = Buffer::empty(area);
        TypingFooterWidget::new(&session).render(area, &mut buf);
        assert_eq!(buffer_lines(&buf)[0], " Agent is typing...");
    }
}

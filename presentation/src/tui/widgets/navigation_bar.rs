//! Navigation bar widget - chat title and the close hint

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const CLOSE_HINT: &str = "Esc close";

pub struct NavigationBarWidget<'a> {
    title: &'a str,
}

impl<'a> NavigationBarWidget<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }
}

impl<'a> Widget for NavigationBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        block.render(area, buf);

        let title = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                self.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(title).render(inner, buf);

        let hint_width = CLOSE_HINT.len() as u16;
        if inner.width > hint_width {
            let hint_area = Rect {
                x: inner.right() - hint_width,
                width: hint_width,
                ..inner
            };
            Paragraph::new(Span::styled(
                CLOSE_HINT,
                Style::default().fg(Color::DarkGray),
            ))
            .render(hint_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_lines;

    #[test]
    fn test_title_and_hint() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        NavigationBarWidget::new("Chat with us").render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[1].contains("Chat with us"));
        assert!(lines[1].contains("Esc close"));
    }

    #[test]
    fn test_hint_dropped_when_too_narrow() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        NavigationBarWidget::new("Help").render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[1].contains("Help"));
        assert!(!lines[1].contains("close"));
    }
}

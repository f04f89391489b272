//! Input widget - single-line message composer with a block cursor

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "> ";
const PLACEHOLDER: &str = "Type a message";

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prompt_span = Span::styled(
            PROMPT,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
        let cursor_style = Style::default().fg(Color::Black).bg(Color::Green);

        let text = self.state.input.as_str();
        let cursor = self.state.cursor_pos.min(text.len());

        let mut spans = vec![prompt_span];
        if text.is_empty() {
            spans.push(Span::styled(" ", cursor_style));
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            let (before, after) = text.split_at(cursor);
            spans.push(Span::raw(before));
            let mut rest = after.chars();
            match rest.next() {
                Some(c) => {
                    spans.push(Span::styled(c.to_string(), cursor_style));
                    spans.push(Span::raw(rest.as_str()));
                }
                None => spans.push(Span::styled(" ", cursor_style)),
            }
        }

        // Keep the cursor visible on long input
        let inner_width = area.width.saturating_sub(2) as usize;
        let cursor_col = PROMPT.len() + text[..cursor].chars().count();
        let scroll_x = (cursor_col + 1).saturating_sub(inner_width) as u16;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .style(Style::default().fg(Color::Green));

        Paragraph::new(Line::from(spans))
            .block(block)
            .scroll((0, scroll_x))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_lines;

    fn render(state: &TuiState, width: u16) -> String {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        InputWidget::new(state).render(area, &mut buf);
        buffer_lines(&buf).remove(1)
    }

    #[test]
    fn test_placeholder_when_empty() {
        let state = TuiState::new();
        assert!(render(&state, 40).contains("Type a message"));
    }

    #[test]
    fn test_renders_input_text() {
        let mut state = TuiState::new();
        for c in "hello".chars() {
            state.insert_char(c);
        }
        let row = render(&state, 40);
        assert!(row.contains("> hello"));
        assert!(!row.contains("Type a message"));
    }

    #[test]
    fn test_long_input_keeps_cursor_end_visible() {
        let mut state = TuiState::new();
        for c in "abcdefghijklmnopqrstuvwxyz".chars() {
            state.insert_char(c);
        }
        let row = render(&state, 12);
        assert!(row.contains("xyz"));
        assert!(!row.contains("abc"));
    }
}

//! Message list widget - newest message at the bottom
//!
//! Session state keeps messages newest-first; the list walks them in reverse
//! so the conversation reads top to bottom and the latest row sits right
//! above the typing footer.

use chatview_domain::{Message, SessionState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Shown in front of the author name when the author has an avatar.
pub const AVATAR_MARKER: &str = "◐ ";

pub struct MessageListWidget<'a> {
    session: &'a SessionState,
    scroll_offset: usize,
}

impl<'a> MessageListWidget<'a> {
    pub fn new(session: &'a SessionState) -> Self {
        Self {
            session,
            scroll_offset: 0,
        }
    }

    /// Lines scrolled up from the bottom.
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Largest useful scroll offset when rendered into `area`.
    pub fn max_scroll(&self, area: Rect) -> usize {
        self.paragraph().line_count(inner_width(area)).saturating_sub(inner_height(area))
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.format_messages()).wrap(Wrap { trim: false })
    }

    fn format_messages(&self) -> Text<'a> {
        let visitor_id = self.session.visitor().map(|v| &v.id);
        let mut lines: Vec<Line> = Vec::new();

        for message in self.session.messages().rev() {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            if message.is_system() {
                lines.push(system_line(message));
            } else {
                let own = visitor_id.is_some_and(|id| message.is_authored_by(id));
                push_user_message(&mut lines, message, own);
            }
        }

        Text::from(lines)
    }
}

fn system_line(message: &Message) -> Line<'_> {
    Line::from(Span::styled(
        message.text.as_str(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
}

fn push_user_message<'a>(lines: &mut Vec<Line<'a>>, message: &'a Message, own: bool) {
    let name_color = if own {
        Color::Green
    } else if message.author.is_none() {
        Color::Red
    } else {
        Color::Yellow
    };
    let name_style = Style::default()
        .fg(name_color)
        .add_modifier(Modifier::BOLD);

    let mut header = Vec::new();
    if message.author_avatar().is_some() {
        header.push(Span::styled(AVATAR_MARKER, Style::default().fg(Color::Cyan)));
    }
    header.push(Span::styled(message.author_name(), name_style));
    header.push(Span::styled(
        format!("  {}", message.created_at.format("%H:%M")),
        Style::default().fg(Color::DarkGray),
    ));

    let alignment = if own {
        Alignment::Right
    } else {
        Alignment::Left
    };

    lines.push(Line::from(header).alignment(alignment));
    for content_line in message.text.lines() {
        lines.push(Line::from(format!("  {}", content_line)).alignment(alignment));
    }
}

// Both minus the borders
fn inner_width(area: Rect) -> u16 {
    area.width.saturating_sub(2)
}

fn inner_height(area: Rect) -> usize {
    usize::from(area.height.saturating_sub(2))
}

impl<'a> Widget for MessageListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = self.paragraph();
        let max_scroll = paragraph
            .line_count(inner_width(area))
            .saturating_sub(inner_height(area));

        // scroll_offset=0 means "show bottom"
        let top = max_scroll - self.scroll_offset.min(max_scroll);
        let scroll = u16::try_from(top).unwrap_or(u16::MAX);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Messages ({}) ", self.session.message_count()))
            .style(Style::default().fg(Color::White));

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}

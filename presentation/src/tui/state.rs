//! TUI-local state
//!
//! Everything here belongs to the terminal surface only. Conversation state
//! lives in the chat view's `SessionState` and is never copied into this
//! struct.

/// Terminal-side state: the input line and the message list scroll.
#[derive(Debug, Default)]
pub struct TuiState {
    /// Text being composed (UTF-8, single line)
    pub input: String,
    /// Byte offset of the cursor in `input`
    pub cursor_pos: usize,
    /// Lines scrolled up from the bottom of the message list (0 = follow)
    pub scroll_offset: usize,
    /// Upper bound for `scroll_offset` as of the last draw; `None` until measured
    scroll_limit: Option<usize>,
    /// Set when the user asked to close the chat
    pub should_close: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Remove the character before the cursor. Returns whether the input changed.
    pub fn delete_char(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let prev_char_len = self.input[..self.cursor_pos]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.input.remove(self.cursor_pos - prev_char_len);
        self.cursor_pos -= prev_char_len;
        true
    }

    pub fn cursor_left(&mut self) {
        let prev_char_len = self.input[..self.cursor_pos]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor_pos -= prev_char_len;
    }

    pub fn cursor_right(&mut self) {
        let next_char_len = self.input[self.cursor_pos..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor_pos += next_char_len;
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    /// Take the input buffer contents and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let offset = self.scroll_offset.saturating_add(lines);
        self.scroll_offset = match self.scroll_limit {
            Some(limit) => offset.min(limit),
            None => offset,
        };
    }

    /// Record how far the message list can scroll and clamp the offset to it.
    pub fn set_scroll_limit(&mut self, limit: usize) {
        self.scroll_limit = Some(limit);
        self.scroll_offset = self.scroll_offset.min(limit);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Jump back to the newest message.
    pub fn follow(&mut self) {
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_multibyte_input() {
        let mut state = TuiState::new();
        for c in "héllo".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.input, "héllo");
        assert_eq!(state.cursor_pos, "héllo".len());

        state.cursor_home();
        state.cursor_right();
        state.cursor_right();
        assert_eq!(state.cursor_pos, "hé".len());

        assert!(state.delete_char());
        assert_eq!(state.input, "hllo");
        assert_eq!(state.cursor_pos, 1);

        state.cursor_home();
        assert!(!state.delete_char());
        state.cursor_left();
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn test_take_input_resets_cursor() {
        let mut state = TuiState::new();
        state.insert_char('h');
        state.insert_char('i');

        assert_eq!(state.take_input(), "hi");
        assert!(state.input.is_empty());
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn test_scroll_saturates_at_bottom() {
        let mut state = TuiState::new();
        state.scroll_up(5);
        state.scroll_down(2);
        assert_eq!(state.scroll_offset, 3);
        state.scroll_down(10);
        assert_eq!(state.scroll_offset, 0);
        state.scroll_up(4);
        state.follow();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_limited_at_top() {
        let mut state = TuiState::new();
        state.scroll_up(50);
        state.set_scroll_limit(7);
        assert_eq!(state.scroll_offset, 7);

        state.scroll_up(3);
        assert_eq!(state.scroll_offset, 7);
        // One step down moves immediately
        state.scroll_down(3);
        assert_eq!(state.scroll_offset, 4);

        state.set_scroll_limit(0);
        assert_eq!(state.scroll_offset, 0);
    }
}

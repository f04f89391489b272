//! Key bindings
//!
//! The chat screen has a single input mode: printable keys edit the message,
//! Enter sends it, Esc or Ctrl+C closes the chat.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Insert a character at the cursor
    InsertChar(char),
    /// Delete the character before the cursor (Backspace)
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    /// Send the current input
    Submit,
    /// Scroll the message list towards older messages
    ScrollUp,
    /// Scroll the message list towards newer messages
    ScrollDown,
    /// Close the chat
    Close,
    /// No action
    None,
}

impl Action {
    /// Whether this action changes the input text.
    pub fn edits_input(&self) -> bool {
        matches!(self, Self::InsertChar(_) | Self::DeleteChar)
    }
}

/// Maps key events to actions
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> Action {
        if key.kind == KeyEventKind::Release {
            return Action::None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Close,
            (KeyCode::Esc, _) => Action::Close,

            (KeyCode::Enter, _) => Action::Submit,
            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorStart,
            (KeyCode::End, _) => Action::CursorEnd,

            (KeyCode::Up, _) | (KeyCode::PageUp, _) => Action::ScrollUp,
            (KeyCode::Down, _) | (KeyCode::PageDown, _) => Action::ScrollDown,

            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                Action::InsertChar(c)
            }

            _ => Action::None,
        }
    }
}

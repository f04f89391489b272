//! TUI (Text User Interface) module for chatview
//!
//! Terminal rendition of the chat surface using ratatui: navigation bar,
//! status line, message list, typing footer and input box, driven by a
//! [`ChatView`](chatview_application::ChatView).

mod app;
mod host;
mod keys;
mod state;
mod transition;
mod widgets;

pub use app::{ChatApp, TuiOptions};
pub use host::TerminalHost;
pub use keys::{Action, KeyHandler};
pub use state::TuiState;
pub use transition::ExitTransition;
pub use widgets::{
    ChatScreen, MainLayout, input::InputWidget, message_list::MessageListWidget,
    navigation_bar::NavigationBarWidget, status_line::StatusLineWidget,
    typing_footer::TypingFooterWidget,
};

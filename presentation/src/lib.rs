//! Presentation layer for chatview
//!
//! This crate contains the CLI definition, the terminal chat surface and
//! the plain-text transcript used by headless runs.

pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::transcript::TranscriptFormatter;
pub use tui::{ChatApp, ExitTransition, TerminalHost, TuiOptions};

//! Plain-text output for headless runs

pub mod transcript;

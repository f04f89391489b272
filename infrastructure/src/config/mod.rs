//! Configuration file loading for chatview
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CHATVIEW_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./chatview.toml` or `./.chatview.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/chatview/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChatConfig, FileClientConfig, FileConfig, FileLogConfig,
    FileTuiConfig,
};
pub use loader::ConfigLoader;

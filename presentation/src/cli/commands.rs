//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for chatview
#[derive(Parser, Debug)]
#[command(name = "chatview")]
#[command(author, version, about = "Terminal support-chat view driven by visitor client events")]
#[command(long_about = r#"
chatview mounts a single support-chat screen and keeps it in sync with the
events of a visitor messaging client: new messages, agent and visitor
profiles, online status, typing indicator and chat end.

Events come from a JSONL event script replayed through an in-process client:
  {"delay_ms": 250, "event": "new_message", "data": {"id": "m1", ...}}

Configuration is merged from (highest priority first):
1. CHATVIEW_* environment variables (CHATVIEW_CHAT__CHAT_TITLE=...)
2. --config <path>       Explicit config file
3. ./chatview.toml       Project-level config
4. ~/.config/chatview/config.toml   Global config

Example:
  chatview --script demos/support.jsonl
  chatview --script demos/support.jsonl --headless
  chatview --title "Help desk" --transcript chat.jsonl
"#)]
pub struct Cli {
    /// JSONL event script to replay into the chat
    #[arg(short, long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Replay the script without delays, print the transcript and exit
    #[arg(long)]
    pub headless: bool,

    /// Override the chat title shown in the navigation bar
    #[arg(short, long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Append every inbound event and outbound call to a JSONL file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of the default log location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_headless_script_run() {
        let cli = Cli::parse_from([
            "chatview",
            "--script",
            "demo.jsonl",
            "--headless",
            "-vv",
        ]);
        assert_eq!(cli.script, Some(PathBuf::from("demo.jsonl")));
        assert!(cli.headless);
        assert_eq!(cli.verbose, 2);
        assert!(cli.title.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "chatview",
            "--title",
            "Help desk",
            "--transcript",
            "out.jsonl",
            "--no-config",
        ]);
        assert_eq!(cli.title.as_deref(), Some("Help desk"));
        assert_eq!(cli.transcript, Some(PathBuf::from("out.jsonl")));
        assert!(cli.no_config);
        assert!(!cli.show_config);
    }
}

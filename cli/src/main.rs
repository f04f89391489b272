//! CLI entrypoint for chatview
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use chatview_application::ChatView;
use chatview_infrastructure::{
    ConfigLoader, EventScript, FileConfig, JsonlTranscriptLogger, LocalVisitorClient, ScriptReplay,
};
use chatview_presentation::{
    ChatApp, Cli, ExitTransition, TerminalHost, TranscriptFormatter, TuiOptions,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources());
        return Ok(());
    }

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(&cli)?;

    info!("Starting chatview");

    let config = load_config(&cli)?;
    let chat_config = config.chat.to_chat_view_config();

    // === Dependency Injection ===
    let mut client = LocalVisitorClient::new();
    if config.client.echo_sent {
        client = client.with_echo(config.client.visitor_id.clone());
    }
    let client = Arc::new(client);

    let mut view = ChatView::attach(client.clone(), chat_config)?;

    if let Some(path) = &config.log.transcript {
        match JsonlTranscriptLogger::open(path) {
            Some(logger) => {
                info!(path = %logger.path().display(), "Writing transcript");
                view = view.with_transcript(Arc::new(logger));
            }
            None => warn!("Transcript disabled"),
        }
    }

    let script = config
        .client
        .script
        .as_deref()
        .map(EventScript::load)
        .transpose()?;

    // Headless mode: replay, print, exit
    if cli.headless {
        if let Some(script) = script {
            let emitted = ScriptReplay::new(script)
                .instant()
                .run(&client, CancellationToken::new())
                .await;
            info!(emitted, "Script replayed");
        }
        view.drain();

        print!("{}", TranscriptFormatter::format(view.state(), view.config()));

        view.close(async {}, &TerminalHost::new()).await;
        return Ok(());
    }

    // Interactive mode
    let cancel = CancellationToken::new();
    let replay = script.map(|script| ScriptReplay::new(script).spawn(client.clone(), cancel.clone()));

    let host = Arc::new(TerminalHost::new());
    let options = TuiOptions {
        exit_transition: ExitTransition::from_millis(config.tui.exit_animation_ms),
        tick: Duration::from_millis(config.tui.tick_ms),
    };

    let result = ChatApp::new(view, host.clone(), options).run().await;

    cancel.cancel();
    if let Some(handle) = replay {
        match handle.await {
            Ok(emitted) => info!(emitted, "Script replay stopped"),
            Err(e) => warn!("Script replay task failed: {}", e),
        }
    }

    result.context("terminal UI failed")?;
    info!(dismissed = host.is_closed(), "chatview exiting");

    Ok(())
}

/// Load, override and validate configuration.
///
/// CLI flags win over every file and environment source.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };

    if let Some(title) = &cli.title {
        config.chat.chat_title = title.clone();
    }
    if let Some(script) = &cli.script {
        config.client.script = Some(script.clone());
    }
    if let Some(transcript) = &cli.transcript {
        config.log.transcript = Some(transcript.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Initialize logging based on verbosity level.
///
/// The TUI owns stdout, so interactive runs log to a file; headless runs
/// log to stderr.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let path = cli.log_file.clone().unwrap_or_else(default_log_path);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log file path has no file name: {}", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("chatview")
        .join("chatview.log")
}

//! Numpad Games - tic-tac-toe and a number grid in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use numpad_games::tui::{self, App};
use numpad_games::{Cli, Command, Config, json_report, replay, text_report};
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(profile) = cli.input_profile {
        config = config.with_input_profile(profile);
    }

    match cli.command {
        Command::Play { first } => {
            if let Some(first) = first {
                config = config.with_first_player(first);
            }
            init_file_logging(config.log_file())?;
            let profile = config.input_profile().resolve();
            run_tui(App::tictactoe(*config.first_player(), profile), &config)
        }
        Command::Grid => {
            init_file_logging(config.log_file())?;
            let profile = config.input_profile().resolve();
            run_tui(App::grid(profile), &config)
        }
        Command::Replay { moves, first, json } => {
            init_stderr_logging();
            let game = replay(first.unwrap_or(*config.first_player()), &moves);
            let report = if json {
                json_report(&game)?
            } else {
                text_report(&game)
            };
            println!("{}", report);
            Ok(())
        }
    }
}

#[instrument(skip(app, config))]
fn run_tui(app: App, config: &Config) -> Result<()> {
    info!(first = %config.first_player(), "Launching");
    tui::run(app, Duration::from_millis(*config.tick_rate_ms()))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}

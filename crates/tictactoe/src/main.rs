//! tictactoe - two-player tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe::cli::{Cli, Command};
use tictactoe::{AppConfig, MoveArg, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { json, moves } => run_replay(json, &moves),
    }
}

/// Interactive board. Logs go to a file so they do not corrupt the screen.
fn run_play(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tictactoe::tui::run_tui(config)
}

/// Scripted game printed to stdout.
fn run_replay(json: bool, moves: &[MoveArg]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let view = replay(moves)?;
    info!(status = ?view.status(), "Printing result");

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}\n\n{}", view.board_text(), view.message());
    }
    Ok(())
}

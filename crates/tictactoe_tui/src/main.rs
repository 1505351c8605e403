//! Tic-tac-toe with time travel: command-line entry point.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tictactoe_history::Position;
use tictactoe_tui::{Cli, Command, TuiSettings, replay, report, run_interactive};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = TuiSettings::load(&cli.config)?;

    match cli.command() {
        Command::Play => {
            init_file_tracing(&settings)?;
            run_interactive(&settings)
        }
        Command::Replay { moves, jump, json } => {
            init_stderr_tracing(&settings);
            run_replay(&settings, &moves, jump, json)
        }
    }
}

fn env_filter(settings: &TuiSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Logs go to a file so they never interfere with the terminal UI.
fn init_file_tracing(settings: &TuiSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing(settings: &TuiSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .try_init();
}

#[instrument(skip(settings))]
fn run_replay(
    settings: &TuiSettings,
    moves: &[Position],
    jump: Option<usize>,
    json: bool,
) -> Result<()> {
    let indices: Vec<usize> = moves.iter().map(|pos| pos.to_index()).collect();
    let game = replay(&indices, jump)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
    } else {
        print!("{}", report(&game, *settings.show_coordinates()));
    }

    info!(status = %game.status(), "Replay printed");
    Ok(())
}

//! Strictly Console - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use strictly_console::{
    Cli, ConsoleConfig, ConsoleRenderer, LineReader, init_tracing, wait_for_key,
};
use strictly_tictactoe::{Phase, Session};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(ConsoleConfig::load(cli.config.as_deref())?);

    init_tracing(config.log_filter());
    let source = ConsoleConfig::locate(Path::new("."), cli.config.as_deref());
    info!(config_file = ?source, ?config, "Starting Strictly Console");

    run(config)
}

/// Plays one game on stdin/stdout.
#[instrument(skip_all)]
fn run(config: ConsoleConfig) -> Result<()> {
    let pause = *config.pause_on_exit();
    let mut session = Session::new(
        LineReader::stdin(),
        ConsoleRenderer::new(std::io::stdout(), config),
    );

    let game = session.run()?;
    info!(phase = ?game.phase(), marks = game.board().marks_placed(), "Game over");

    match game.phase() {
        Phase::Won(_) | Phase::Draw if pause => {
            let (_, renderer) = session.into_parts();
            wait_for_key(&mut renderer.into_inner())?;
        }
        Phase::Won(_) | Phase::Draw | Phase::Quit | Phase::AwaitingMove(_) => {}
    }

    Ok(())
}

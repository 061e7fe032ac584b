//! Command-line interface for strictly_console.

use crate::config::ConsoleConfig;
use clap::Parser;
use std::path::PathBuf;

/// Strictly Console - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_console")]
#[command(about = "Two-player tic-tac-toe on a 3x3 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not clear the screen between turns
    #[arg(long)]
    pub no_clear: bool,

    /// Print messages without color
    #[arg(long)]
    pub no_color: bool,

    /// Exit right after the game instead of waiting for a key
    #[arg(long)]
    pub no_pause: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, mut config: ConsoleConfig) -> ConsoleConfig {
        if self.no_clear {
            config = config.with_clear_screen(false);
        }
        if self.no_color {
            config = config.with_color(false);
        }
        if self.no_pause {
            config = config.with_pause_on_exit(false);
        }
        config
    }
}

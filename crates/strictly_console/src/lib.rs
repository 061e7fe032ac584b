//! Strictly Console - terminal front end for strictly_tictactoe
//!
//! Supplies the two adapters the engine's session loop needs:
//!
//! - [`LineReader`]: one line of keyboard input per turn
//! - [`ConsoleRenderer`]: `#`-bordered board art, red error text, prompts
//!
//! plus [`ConsoleConfig`] (TOML), [`Cli`] (clap) and tracing bootstrap.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod render;
mod terminal;

pub use cli::Cli;
pub use config::{ConfigError, ConsoleConfig, DEFAULT_CONFIG_FILE};
pub use input::LineReader;
pub use render::ConsoleRenderer;
pub use terminal::{init_tracing, wait_for_key};

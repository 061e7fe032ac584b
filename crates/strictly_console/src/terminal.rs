//! Terminal helpers: logging bootstrap and the end-of-game key wait.

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::{IsTerminal, Write};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `fallback`. Logs go to stderr so they never
/// interleave with the board on stdout.
pub fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Prints "Press any key to continue..." and blocks until a key is pressed.
///
/// Does nothing when stdin is not a terminal (piped input, tests).
#[instrument(skip(out))]
pub fn wait_for_key(out: &mut impl Write) -> std::io::Result<()> {
    if !std::io::stdin().is_terminal() {
        debug!("stdin is not a terminal, skipping key wait");
        return Ok(());
    }

    write!(out, "Press any key to continue...")?;
    out.flush()?;

    enable_raw_mode()?;
    let result = read_key_press();
    disable_raw_mode()?;
    writeln!(out)?;
    result
}

fn read_key_press() -> std::io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}

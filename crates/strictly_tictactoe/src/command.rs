//! Parsing of raw console lines into commands.
//!
//! The grammar is deliberately narrow: `q` to quit, or exactly two digits
//! `<row><col>` in 1..=3. Anything else is a syntax error.

use crate::types::CellAddress;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A player's intent for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Place the current player's mark at the address.
    Play(CellAddress),
    /// Leave the game immediately.
    Quit,
}

/// Input that does not match the command grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// Neither `q` nor two digits in 1..=3.
    #[display("Invalid command syntax")]
    InvalidSyntax,
}

/// Parses a raw input line.
///
/// Surrounding whitespace is ignored and letters are case-insensitive.
#[instrument]
pub fn parse(raw: &str) -> Result<Command, ParseError> {
    let input = raw.trim().to_lowercase();
    let chars: Vec<char> = input.chars().collect();

    let command = match chars.as_slice() {
        ['q'] => Command::Quit,
        [row, col] => {
            let row = coordinate(*row).ok_or(ParseError::InvalidSyntax)?;
            let col = coordinate(*col).ok_or(ParseError::InvalidSyntax)?;
            Command::Play(CellAddress::new(row, col))
        }
        _ => return Err(ParseError::InvalidSyntax),
    };

    debug!(?command, "Parsed command");
    Ok(command)
}

/// Reads one decimal digit and keeps it only if it lies in 1..=3.
fn coordinate(c: char) -> Option<u8> {
    c.to_digit(10)
        .and_then(|d| u8::try_from(d).ok())
        .filter(|d| (1..=3).contains(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_address_parses() {
        for row in 1..=3u8 {
            for col in 1..=3u8 {
                assert_eq!(
                    parse(&format!("{row}{col}")),
                    Ok(Command::Play(CellAddress::new(row, col)))
                );
            }
        }
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        assert_eq!(parse("q"), Ok(Command::Quit));
        assert_eq!(parse("Q"), Ok(Command::Quit));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(parse("  q\n"), Ok(Command::Quit));
        assert_eq!(
            parse("\t23 \r\n"),
            Ok(Command::Play(CellAddress::new(2, 3)))
        );
    }

    #[test]
    fn test_rejected_inputs() {
        for raw in ["", "   ", "44", "1a", "123", "qq", "0", "01", "30", "1 2", "quit", "x"] {
            assert_eq!(parse(raw), Err(ParseError::InvalidSyntax), "input {raw:?}");
        }
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Fullwidth digits are two chars but not decimal ASCII digits.
        assert_eq!(parse("１２"), Err(ParseError::InvalidSyntax));
    }
}

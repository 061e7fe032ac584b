//! Core domain types for tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// First player (moves first, places [`Cell::MarkA`]).
    #[strum(to_string = "Player1")]
    First,
    /// Second player (places [`Cell::MarkB`]).
    #[strum(to_string = "Player2")]
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the mark this player places on the board.
    pub fn mark(self) -> Cell {
        match self {
            Player::First => Cell::MarkA,
            Player::Second => Cell::MarkB,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Mark of [`Player::First`].
    MarkA,
    /// Mark of [`Player::Second`].
    MarkB,
}

impl Cell {
    /// Returns the player owning this mark, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::MarkA => Some(Player::First),
            Cell::MarkB => Some(Player::Second),
        }
    }
}

/// A cell address in user-facing coordinates.
///
/// Both `row` and `col` count from 1. The conversion to grid indices
/// happens in [`Board`](crate::Board), which rejects anything outside 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct CellAddress {
    row: u8,
    col: u8,
}

impl CellAddress {
    /// Every valid address on the board, in row-major order.
    pub const ALL: [CellAddress; 9] = [
        CellAddress { row: 1, col: 1 },
        CellAddress { row: 1, col: 2 },
        CellAddress { row: 1, col: 3 },
        CellAddress { row: 2, col: 1 },
        CellAddress { row: 2, col: 2 },
        CellAddress { row: 2, col: 3 },
        CellAddress { row: 3, col: 1 },
        CellAddress { row: 3, col: 2 },
        CellAddress { row: 3, col: 3 },
    ];

    /// Returns the row (1-based).
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Returns the column (1-based).
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Returns true if both coordinates lie in 1..=3.
    #[instrument]
    pub fn in_bounds(&self) -> bool {
        (1..=3).contains(&self.row) && (1..=3).contains(&self.col)
    }
}

impl std::fmt::Display for CellAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_players_alternate() {
        for player in Player::iter() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_player_marks_differ() {
        assert_eq!(Player::First.mark(), Cell::MarkA);
        assert_eq!(Player::Second.mark(), Cell::MarkB);
        assert_eq!(Cell::MarkA.owner(), Some(Player::First));
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn test_player_display_names() {
        assert_eq!(Player::First.to_string(), "Player1");
        assert_eq!(Player::Second.to_string(), "Player2");
    }

    #[test]
    fn test_address_bounds() {
        assert!(CellAddress::ALL.iter().all(CellAddress::in_bounds));
        assert!(!CellAddress::new(0, 1).in_bounds());
        assert!(!CellAddress::new(2, 4).in_bounds());
    }
}

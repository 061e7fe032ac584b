//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. The outcome is always recomputed from the board,
//! never stored.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::board::Board;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the board says about the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Nobody has won and empty cells remain.
    InProgress,
    /// The player owns a complete line.
    Won(Player),
    /// The board is full with no complete line.
    Draw,
}

/// Evaluates the board: a winning line first, then a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        return GameOutcome::Won(winner);
    }
    if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

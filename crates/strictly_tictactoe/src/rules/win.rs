//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Cell, CellAddress, Player};
use tracing::instrument;

const fn at(row: u8, col: u8) -> CellAddress {
    CellAddress::ALL[(row as usize - 1) * 3 + (col as usize - 1)]
}

/// The eight lines of the board in evaluation order.
pub const LINES: [[CellAddress; 3]; 8] = [
    // Rows
    [at(1, 1), at(1, 2), at(1, 3)],
    [at(2, 1), at(2, 2), at(2, 3)],
    [at(3, 1), at(3, 2), at(3, 3)],
    // Columns
    [at(1, 1), at(2, 1), at(3, 1)],
    [at(1, 2), at(2, 2), at(3, 2)],
    [at(1, 3), at(2, 3), at(3, 3)],
    // Diagonals
    [at(1, 1), at(2, 2), at(3, 3)],
    [at(1, 3), at(2, 2), at(3, 1)],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line found, `None` otherwise.
/// Only one player moves per turn, so two players can never both own a line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let first = board.cell_at(*a).ok()?;
        if first != Cell::Empty
            && board.cell_at(*b).ok()? == first
            && board.cell_at(*c).ok()? == first
        {
            first.owner()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(at(1, 1), Cell::MarkA).unwrap();
        board.place(at(1, 2), Cell::MarkA).unwrap();
        board.place(at(1, 3), Cell::MarkA).unwrap();
        assert_eq!(check_winner(&board), Some(Player::First));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(at(1, 3), Cell::MarkB).unwrap();
        board.place(at(2, 2), Cell::MarkB).unwrap();
        board.place(at(3, 1), Cell::MarkB).unwrap();
        assert_eq!(check_winner(&board), Some(Player::Second));
    }

    #[test]
    fn test_lines_cover_every_cell() {
        for address in CellAddress::ALL {
            assert!(LINES.iter().flatten().any(|a| *a == address));
        }
    }
}

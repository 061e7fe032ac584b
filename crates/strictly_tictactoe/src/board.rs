//! The 3x3 board.

use crate::types::{Cell, CellAddress};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// An address outside 1..=3 reached the board.
///
/// The command parser never produces such an address, so seeing this
/// error means a caller skipped validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell address {address:?} is outside the 3x3 board")]
pub struct OutOfBoundsError {
    /// The offending address.
    pub address: CellAddress,
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`, zero-based.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a user-facing address into zero-based grid indices.
    fn index(address: CellAddress) -> Result<(usize, usize), OutOfBoundsError> {
        if !address.in_bounds() {
            return Err(OutOfBoundsError { address });
        }
        Ok((
            usize::from(address.row()) - 1,
            usize::from(address.col()) - 1,
        ))
    }

    /// Returns the cell at the given address.
    pub fn cell_at(&self, address: CellAddress) -> Result<Cell, OutOfBoundsError> {
        let (row, col) = Self::index(address)?;
        Ok(self.cells[row][col])
    }

    /// Returns true if the cell at `address` holds a mark.
    #[instrument(skip(self))]
    pub fn is_occupied(&self, address: CellAddress) -> Result<bool, OutOfBoundsError> {
        Ok(self.cell_at(address)? != Cell::Empty)
    }

    /// Writes `mark` into the cell at `address`.
    ///
    /// No legality check happens here: whatever was in the cell is
    /// overwritten. Run the move validator first.
    #[instrument(skip(self))]
    pub fn place(&mut self, address: CellAddress, mark: Cell) -> Result<(), OutOfBoundsError> {
        let (row, col) = Self::index(address)?;
        self.cells[row][col] = mark;
        Ok(())
    }

    /// Returns true if at least one cell is empty.
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(|cell| *cell == Cell::Empty)
    }

    /// Returns the rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Counts cells holding any mark.
    pub fn marks_placed(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }
}

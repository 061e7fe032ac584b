//! Move legality checks.
//!
//! Validation is a pure function of the board and the proposed address.
//! It never mutates the board; the engine places the mark only after
//! [`validate`] succeeds.

use crate::board::Board;
use crate::types::CellAddress;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// A well-formed move that the rules do not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejected {
    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] CellAddress),
}

/// Checks that a mark may be placed at `address`.
///
/// # Panics
///
/// Panics if `address` lies outside the board. The command parser only
/// yields in-range addresses, so this is a defect in the caller.
#[instrument(skip(board))]
pub fn validate(board: &Board, address: CellAddress) -> Result<(), MoveRejected> {
    let occupied = board
        .is_occupied(address)
        .unwrap_or_else(|err| panic!("move validation contract violated: {err}"));

    if occupied {
        debug!(%address, "Rejected move onto occupied cell");
        return Err(MoveRejected::CellOccupied(address));
    }
    Ok(())
}

//! Move legality checks.
//!
//! Preconditions are side-effect free. They name why a move is illegal
//! but never decide what the caller does about it.

use super::types::CELL_COUNT;
use super::{Board, GameStatus};
use tracing::instrument;

/// Reason a proposed move is illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMove {
    /// The game is already decided.
    #[display("Game is already over ({:?})", _0)]
    GameOver(#[error(not(source))] GameStatus),

    /// The cell index is outside 0..8.
    #[display("Cell {} is out of range (0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell is already marked.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

/// Precondition: the game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the status allows another move.
    pub fn check(status: GameStatus) -> Result<(), IllegalMove> {
        if status.is_in_progress() {
            Ok(())
        } else {
            Err(IllegalMove::GameOver(status))
        }
    }
}

/// Precondition: the cell index must exist on the board.
pub struct CellInRange;

impl CellInRange {
    /// Checks the index addresses one of the nine cells.
    pub fn check(index: usize) -> Result<(), IllegalMove> {
        if index < CELL_COUNT {
            Ok(())
        } else {
            Err(IllegalMove::OutOfRange(index))
        }
    }
}

/// Precondition: the targeted cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks nobody has marked the cell yet.
    pub fn check(board: &Board, index: usize) -> Result<(), IllegalMove> {
        if board.is_empty(index) {
            Ok(())
        } else {
            Err(IllegalMove::Occupied(index))
        }
    }
}

/// Composite precondition: a move is legal if the game is in progress,
/// the index is on the board and the cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, reporting the first failure.
    #[instrument(skip(board))]
    pub fn check(board: &Board, index: usize, status: GameStatus) -> Result<(), IllegalMove> {
        GameNotOver::check(status)?;
        CellInRange::check(index)?;
        CellIsEmpty::check(board, index)?;
        Ok(())
    }

    /// Returns true if the move passes every precondition.
    pub fn is_legal(board: &Board, index: usize, status: GameStatus) -> bool {
        Self::check(board, index, status).is_ok()
    }
}

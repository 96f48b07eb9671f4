//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use tracing::instrument;

/// The eight winning lines in evaluation order: rows top-to-bottom,
/// columns left-to-right, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the player owning the first line (in [`WINNING_LINES`] order)
/// whose three cells carry the same mark, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let first = cells[a];
        if first == cells[b] && first == cells[c] {
            first.player()
        } else {
            None
        }
    })
}

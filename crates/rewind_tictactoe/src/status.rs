//! Game status derived from a snapshot.

use super::rules::{check_winner, is_draw, player_to_move};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
///
/// Never stored: always recomputed from the current snapshot and its step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player to move.
    InProgress(Player),
    /// Game ended in a win.
    Won(Player),
    /// Every cell is occupied and nobody has a line.
    Draw,
}

impl GameStatus {
    /// Derives the status of `board` recorded at `step`.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, step: usize) -> Self {
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(player_to_move(step))
        }
    }

    /// Returns true while moves may still be made.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

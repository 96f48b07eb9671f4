//! Snapshot history with time travel.
//!
//! The history is an arena of immutable board snapshots plus a pointer to
//! the step currently on display. Jumping only moves the pointer; a move
//! made from an earlier step truncates everything after it before
//! appending, so exactly one line of play is ever stored.

use super::contracts::LegalMove;
use super::error::{HistoryError, InvalidInput};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::player_to_move;
use super::types::CELL_COUNT;
use super::{Board, GameStatus, Position};
use tracing::{debug, info, instrument};

/// Ordered board snapshots and the step currently viewed.
///
/// Step 0 is always the empty board and `current_step` always indexes a
/// recorded snapshot. Every command takes `&mut self` and completes before
/// returning; the history does no locking of its own, so callers sharing
/// one across threads must serialize `apply_move`/`jump_to` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current_step: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current_step: 0,
        }
    }

    /// Plays the next mark at `index` from the current step.
    ///
    /// Returns `Ok(true)` if the move was recorded and `Ok(false)` if the
    /// rules rejected it (occupied cell or decided game), in which case
    /// nothing changes. Any snapshots after the current step are dropped
    /// before the new one is appended.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if `index` is not in 0..8.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, index: usize) -> Result<bool, HistoryError> {
        if index >= CELL_COUNT {
            return Err(InvalidInput::CellOutOfRange { index }.into());
        }

        let current = *self.current_board();
        if let Err(reason) = LegalMove::check(&current, index, self.status()) {
            debug!(%reason, "Move rejected");
            return Ok(false);
        }

        let player = player_to_move(self.current_step);
        let next = current
            .with_mark(index, player)
            .ok_or(InvalidInput::CellOutOfRange { index })?;

        let discarded = self.snapshots.len() - (self.current_step + 1);
        if discarded > 0 {
            info!(discarded, from_step = self.current_step, "Overwriting recorded future");
        }
        self.snapshots.truncate(self.current_step + 1);
        self.snapshots.push(next);
        self.current_step += 1;

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated after move"
        );

        let position = Position::from_index(index);
        match self.status() {
            GameStatus::Won(winner) => info!(?position, %player, %winner, "Winning move"),
            GameStatus::Draw => info!(?position, %player, "Board full, game drawn"),
            GameStatus::InProgress(_) => info!(?position, %player, "Move accepted"),
        }
        Ok(true)
    }

    /// Moves the view to `step` without touching recorded snapshots.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if `step` was never recorded.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        let len = self.snapshots.len();
        if step >= len {
            return Err(InvalidInput::StepOutOfRange { step, len }.into());
        }
        debug!("Jumping to step");
        self.current_step = step;
        Ok(())
    }

    /// Discards the whole history and starts over from the empty board.
    #[instrument(skip(self), fields(discarded = self.snapshots.len() - 1))]
    pub fn reset(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    /// Returns the snapshot at the current step.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current_step]
    }

    /// Derives the status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board(), self.current_step)
    }

    /// Returns the step currently viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Number of recorded snapshots, the empty board included.
    pub fn step_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns every recorded snapshot in step order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the snapshot recorded at `step`, if any.
    pub fn snapshot(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HistoryErrorKind;
    use crate::{Cell, Player};

    fn play(moves: &[usize]) -> GameHistory {
        let mut history = GameHistory::new();
        for &index in moves {
            assert!(history.apply_move(index).unwrap(), "move {index} rejected");
        }
        history
    }

    #[test]
    fn test_new_history() {
        let history = GameHistory::new();
        assert_eq!(history.step_count(), 1);
        assert_eq!(history.current_step(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_moves_alternate_marks() {
        let history = play(&[4, 0]);
        assert_eq!(history.current_board().get(4), Some(Cell::X));
        assert_eq!(history.current_board().get(0), Some(Cell::O));
        assert_eq!(history.status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut history = play(&[4]);
        let before = history.clone();
        assert!(!history.apply_move(4).unwrap());
        assert_eq!(history, before);
    }

    #[test]
    fn test_out_of_range_cell_is_error() {
        let mut history = GameHistory::new();
        let err = history.apply_move(9).unwrap_err();
        assert_eq!(
            err.kind(),
            HistoryErrorKind::InvalidInput(InvalidInput::CellOutOfRange { index: 9 })
        );
        assert_eq!(history, GameHistory::new());
    }

    #[test]
    fn test_jump_keeps_snapshots() {
        let mut history = play(&[0, 1, 2]);
        history.jump_to(1).unwrap();
        assert_eq!(history.current_step(), 1);
        assert_eq!(history.step_count(), 4);
        assert_eq!(history.status(), GameStatus::InProgress(Player::O));
        history.jump_to(3).unwrap();
        assert_eq!(history.current_board().filled_count(), 3);
    }

    #[test]
    fn test_jump_out_of_range_is_error() {
        let mut history = play(&[0]);
        let err = history.jump_to(2).unwrap_err();
        assert_eq!(
            err.kind(),
            HistoryErrorKind::InvalidInput(InvalidInput::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(history.current_step(), 1);
    }

    #[test]
    fn test_move_after_jump_truncates() {
        let mut history = play(&[0, 1, 2, 3]);
        history.jump_to(1).unwrap();
        assert!(history.apply_move(4).unwrap());
        assert_eq!(history.step_count(), 3);
        assert_eq!(history.current_step(), 2);
        assert_eq!(history.current_board().get(4), Some(Cell::O));
        assert_eq!(history.current_board().get(1), Some(Cell::Empty));
    }

    #[test]
    fn test_rejected_move_after_jump_keeps_future() {
        let mut history = play(&[0, 1, 2]);
        history.jump_to(1).unwrap();
        assert!(!history.apply_move(0).unwrap());
        assert_eq!(history.step_count(), 4);
    }

    #[test]
    fn test_reset() {
        let mut history = play(&[0, 1, 2]);
        history.reset();
        assert_eq!(history, GameHistory::new());
    }
}

//! Filled-count invariant: snapshot `s` holds exactly `s` marks.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: the number of marks on each snapshot equals its step.
pub struct FilledMatchesStep;

impl FilledMatchesStep {
    /// Checks a raw snapshot sequence.
    pub fn holds_for(snapshots: &[crate::Board]) -> bool {
        snapshots
            .iter()
            .enumerate()
            .all(|(step, board)| board.filled_count() == step)
    }
}

impl Invariant<GameHistory> for FilledMatchesStep {
    fn holds(history: &GameHistory) -> bool {
        Self::holds_for(history.snapshots())
    }

    fn description() -> &'static str {
        "Each snapshot holds as many marks as its step index"
    }
}

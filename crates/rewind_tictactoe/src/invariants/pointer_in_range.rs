//! Pointer invariant: the current step always names a recorded snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `0 <= current_step < step_count`.
pub struct PointerInRange;

impl Invariant<GameHistory> for PointerInRange {
    fn holds(history: &GameHistory) -> bool {
        history.current_step() < history.step_count()
    }

    fn description() -> &'static str {
        "Current step indexes a recorded snapshot"
    }
}

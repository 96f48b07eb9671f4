//! Monotonic board invariant: each step adds exactly one mark.

use super::super::GameHistory;
use super::super::rules::player_to_move;
use super::Invariant;
use crate::{Board, Cell};

/// Invariant: consecutive snapshots differ in exactly one cell, which went
/// from empty to the mark of the player who moved at that step.
///
/// Together with the first snapshot being empty this also rules out any
/// mark changing once placed.
pub struct SingleCellDelta;

impl SingleCellDelta {
    /// Checks a raw snapshot sequence.
    pub fn holds_for(snapshots: &[Board]) -> bool {
        let Some(first) = snapshots.first() else {
            return false;
        };
        if first != &Board::new() {
            return false;
        }

        snapshots.windows(2).enumerate().all(|(step, pair)| {
            let expected = player_to_move(step).mark();
            let mut changed = pair[0]
                .cells()
                .iter()
                .zip(pair[1].cells())
                .filter(|(before, after)| before != after);

            match (changed.next(), changed.next()) {
                (Some((before, after)), None) => *before == Cell::Empty && *after == expected,
                _ => false,
            }
        })
    }
}

impl Invariant<GameHistory> for SingleCellDelta {
    fn holds(history: &GameHistory) -> bool {
        Self::holds_for(history.snapshots())
    }

    fn description() -> &'static str {
        "Each step places exactly one mark of the player to move"
    }
}

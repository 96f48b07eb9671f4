//! Turn order derived from step parity.

use super::super::Player;

/// Returns the player who moves from the snapshot at `step`.
///
/// X moves from even steps, O from odd steps. Turn order is never stored.
pub fn player_to_move(step: usize) -> Player {
    if step % 2 == 0 { Player::X } else { Player::O }
}

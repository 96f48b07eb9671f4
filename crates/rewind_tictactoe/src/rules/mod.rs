//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots and step numbers. Rules are kept
//! apart from history storage so the history can compose them.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::is_draw;
pub use turn::player_to_move;
pub use win::{WINNING_LINES, check_winner};

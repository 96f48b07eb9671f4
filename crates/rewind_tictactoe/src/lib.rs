//! Tic-tac-toe engine with full move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over snapshots (win, draw, turn order)
//! - **Contracts**: move legality checks
//! - **History**: snapshot arena plus current-step pointer; the only mutable state
//! - **View**: status line and move list for rendering layers
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, StatusLine, StatusView, Player};
//!
//! # fn main() -> Result<(), rewind_tictactoe::HistoryError> {
//! let mut history = GameHistory::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     history.apply_move(cell)?;
//! }
//! assert_eq!(StatusView::describe(&history), StatusLine::Winner(Player::X));
//!
//! // Rewind and branch a new future.
//! history.jump_to(1)?;
//! history.apply_move(8)?;
//! assert_eq!(history.move_list().len(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod history;
mod position;
mod status;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use contracts::{CellInRange, CellIsEmpty, GameNotOver, IllegalMove, LegalMove};
pub use error::{HistoryError, HistoryErrorKind, InvalidInput};
pub use history::GameHistory;
pub use position::Position;
pub use status::GameStatus;
pub use types::{Board, CELL_COUNT, Cell, Player};
pub use view::{StatusLine, StatusView, StepDescriptor};

//! Display-ready projections of the history.
//!
//! Rendering layers read these instead of inspecting the history directly.

use super::{GameHistory, GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Status line shown next to the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(tag = "kind", content = "player")]
pub enum StatusLine {
    /// The current snapshot has a winning line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
    /// The board is full without a winner.
    #[display("Draw")]
    Draw,
}

impl From<GameStatus> for StatusLine {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Won(player) => StatusLine::Winner(player),
            GameStatus::InProgress(player) => StatusLine::NextPlayer(player),
            GameStatus::Draw => StatusLine::Draw,
        }
    }
}

/// One entry of the move list: a step that can be jumped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepDescriptor {
    /// Step index to pass to `jump_to`.
    pub step: usize,
    /// Button text for the step.
    pub label: String,
}

impl StepDescriptor {
    /// Describes `step`.
    pub fn new(step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self { step, label }
    }
}

/// Pure projection of history state into display values.
pub struct StatusView;

impl StatusView {
    /// Describes the status of the current step.
    pub fn describe(history: &GameHistory) -> StatusLine {
        history.status().into()
    }

    /// Lists every recorded step in order.
    pub fn move_list(history: &GameHistory) -> Vec<StepDescriptor> {
        (0..history.step_count()).map(StepDescriptor::new).collect()
    }
}

impl GameHistory {
    /// Lists every recorded step in order.
    pub fn move_list(&self) -> Vec<StepDescriptor> {
        StatusView::move_list(self)
    }
}

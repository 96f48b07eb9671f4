//! Plain-text and JSON drawing of the engine's read-only views.

use rewind_tictactoe::{Board, Cell, GameHistory, StatusLine, StatusView, StepDescriptor};
use serde::Serialize;

/// Draws the board as a 3x3 grid.
///
/// With `show_indices` empty cells carry their 1-based number, otherwise
/// they are left blank.
pub fn board_text(board: &Board, show_indices: bool) -> String {
    if show_indices {
        return board.display();
    }
    board
        .cells()
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Empty => " ",
                    Cell::X => "X",
                    Cell::O => "O",
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n-+-+-\n")
}

/// Draws the move list, marking the current step with `*`.
pub fn move_list_text(history: &GameHistory) -> String {
    StatusView::move_list(history)
        .into_iter()
        .map(|descriptor| {
            let marker = if descriptor.step == history.current_step() {
                '*'
            } else {
                ' '
            };
            format!("{} {}. {}", marker, descriptor.step, descriptor.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Draws board, status line and move list.
pub fn frame_text(history: &GameHistory, show_indices: bool) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        board_text(history.current_board(), show_indices),
        StatusView::describe(history),
        move_list_text(history)
    )
}

/// Everything a front end needs to redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame<'a> {
    /// Cells of the current snapshot.
    pub board: &'a [Cell; 9],
    /// Status line for the current snapshot.
    pub status: StatusLine,
    /// Step currently viewed.
    pub current_step: usize,
    /// Every recorded step.
    pub moves: Vec<StepDescriptor>,
}

impl<'a> Frame<'a> {
    /// Captures the current view of `history`.
    pub fn capture(history: &'a GameHistory) -> Self {
        Self {
            board: history.current_board().cells(),
            status: StatusView::describe(history),
            current_step: history.current_step(),
            moves: StatusView::move_list(history),
        }
    }
}

/// Serializes the current view of `history` as one line of JSON.
pub fn frame_json(history: &GameHistory) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Frame::capture(history))
}

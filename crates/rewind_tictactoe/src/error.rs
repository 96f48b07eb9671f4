//! History error types.

use derive_more::{Display, Error};
use tracing::warn;

/// Caller contract violations rejected by the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidInput {
    /// Cell index outside 0..8.
    #[display("cell index {} is outside 0..8", index)]
    CellOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// Jump target outside the recorded steps.
    #[display("step {} is outside 0..{}", step, len)]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

/// Kind of history error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HistoryErrorKind {
    /// The caller passed an argument outside the engine's contract.
    #[display("Invalid input: {}", _0)]
    InvalidInput(InvalidInput),
}

/// History error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct HistoryError {
    /// What went wrong.
    pub kind: HistoryErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new history error with caller location tracking.
    #[track_caller]
    pub fn new(kind: HistoryErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        warn!(%kind, "Contract violation");
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> HistoryErrorKind {
        self.kind
    }
}

impl From<InvalidInput> for HistoryError {
    #[track_caller]
    fn from(input: InvalidInput) -> Self {
        Self::new(HistoryErrorKind::InvalidInput(input))
    }
}

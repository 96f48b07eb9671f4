//! Terminal front end for the rewind tic-tac-toe engine.
//!
//! Reads one command per line, forwards moves and jumps to the engine and
//! redraws from its read-only views.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod render;
mod session;

pub use cli::Cli;
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, ShellConfig};
pub use render::{Frame, board_text, frame_json, frame_text, move_list_text};
pub use session::{OutputMode, Reply, Session};

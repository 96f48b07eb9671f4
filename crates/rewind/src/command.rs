//! Line commands typed by the player.

use derive_more::{Display, Error};
use rewind_tictactoe::Position;
use tracing::instrument;

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the next mark at a cell index (0-based).
    Move(usize),
    /// Jump to a recorded step.
    Jump(usize),
    /// Start a new game.
    New,
    /// Redraw the board.
    Board,
    /// Print the move list.
    Moves,
    /// Print the status line.
    Status,
    /// Print the command summary.
    Help,
    /// Leave the shell.
    Quit,
}

/// Error parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// The first word is not a command.
    #[display("Unknown command '{}' (type 'help')", _0)]
    Unknown(#[error(not(source))] String),
    /// The command needs an argument.
    #[display("'{}' needs {}", command, expected)]
    MissingArgument {
        /// Command word as typed.
        command: String,
        /// What was expected.
        expected: &'static str,
    },
    /// The cell argument is neither a number nor a position name.
    #[display("'{}' is not a cell (use 1-9 or a name like 'center')", _0)]
    InvalidCell(#[error(not(source))] String),
    /// The step argument is not a number.
    #[display("'{}' is not a step number", _0)]
    InvalidStep(#[error(not(source))] String),
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  move <cell> | m <cell> | <cell>   place the next mark (cell 1-9 or a name like 'top-left')
  jump <step> | j <step>            go back (or forward) to a recorded step
  new                               start a new game
  board | moves | status            redraw part of the display
  help                              show this summary
  quit | exit                       leave";

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    #[instrument]
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let rest = words.collect::<Vec<_>>().join(" ");

        let command = match word.to_ascii_lowercase().as_str() {
            "move" | "m" => Command::Move(parse_cell(require(word, &rest, "a cell")?)?),
            "jump" | "j" => Command::Jump(parse_step(require(word, &rest, "a step number")?)?),
            "new" => Command::New,
            "board" => Command::Board,
            "moves" => Command::Moves,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ if word.parse::<usize>().is_ok() && rest.is_empty() => {
                Command::Move(parse_cell(word)?)
            }
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }
}

fn require<'a>(
    command: &str,
    rest: &'a str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument {
            command: command.to_string(),
            expected,
        })
    } else {
        Ok(rest)
    }
}

/// Parses a cell as shown on the board (1-based) or a position name.
fn parse_cell(s: &str) -> Result<usize, CommandError> {
    if let Ok(number) = s.parse::<usize>() {
        return number
            .checked_sub(1)
            .ok_or_else(|| CommandError::InvalidCell(s.to_string()));
    }
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| CommandError::InvalidCell(s.to_string()))
}

fn parse_step(s: &str) -> Result<usize, CommandError> {
    s.parse::<usize>()
        .map_err(|_| CommandError::InvalidStep(s.to_string()))
}

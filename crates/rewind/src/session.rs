//! Interactive session: turns typed commands into engine calls.
//!
//! The session is the only writer of its [`GameHistory`]; each line is
//! handled to completion before the next one is read.

use crate::command::{Command, HELP};
use crate::config::ShellConfig;
use crate::render;
use anyhow::{Context, Result};
use rewind_tictactoe::{GameHistory, StatusView};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Output format for redraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable grid and lists.
    #[default]
    Text,
    /// One JSON document per redraw.
    Json,
}

/// What the caller should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading.
    Show(String),
    /// Nothing to print.
    Silent,
    /// Stop the session.
    Quit,
}

/// A single game front end wrapping one history.
#[derive(Debug, Clone)]
pub struct Session {
    history: GameHistory,
    config: ShellConfig,
    mode: OutputMode,
}

impl Session {
    /// Creates a session at the start of a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: ShellConfig, mode: OutputMode) -> Self {
        Self {
            history: GameHistory::new(),
            config,
            mode,
        }
    }

    /// Returns the history driven by this session.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Parses and executes one input line.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Result<Reply> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Reply::Silent),
            Err(e) => {
                debug!(error = %e, "Unparseable command");
                Ok(Reply::Show(e.to_string()))
            }
        }
    }

    /// Executes a parsed command against the history.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let reply = match command {
            Command::Move(index) => match self.history.apply_move(index) {
                Ok(true) => self.frame()?,
                Ok(false) => Reply::Show("(move ignored)".to_string()),
                Err(e) => Reply::Show(e.kind().to_string()),
            },
            Command::Jump(step) => match self.history.jump_to(step) {
                Ok(()) => self.frame()?,
                Err(e) => Reply::Show(e.kind().to_string()),
            },
            Command::New => {
                self.history.reset();
                self.frame()?
            }
            Command::Board => match self.mode {
                OutputMode::Text => Reply::Show(render::board_text(
                    self.history.current_board(),
                    *self.config.show_board_indices(),
                )),
                OutputMode::Json => self.frame()?,
            },
            Command::Moves => match self.mode {
                OutputMode::Text => Reply::Show(render::move_list_text(&self.history)),
                OutputMode::Json => self.frame()?,
            },
            Command::Status => match self.mode {
                OutputMode::Text => Reply::Show(StatusView::describe(&self.history).to_string()),
                OutputMode::Json => self.frame()?,
            },
            Command::Help => Reply::Show(HELP.to_string()),
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    /// Renders the full display in the session's output mode.
    pub fn frame(&self) -> Result<Reply> {
        let text = match self.mode {
            OutputMode::Text => {
                render::frame_text(&self.history, *self.config.show_board_indices())
            }
            OutputMode::Json => {
                render::frame_json(&self.history).context("Failed to serialize frame")?
            }
        };
        Ok(Reply::Show(text))
    }

    /// Reads commands from `input` until it ends or the player quits.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        info!("Session started");
        if let Reply::Show(text) = self.frame()? {
            writeln!(output, "{}", text)?;
        }

        let mut lines = input.lines();
        loop {
            if self.mode == OutputMode::Text {
                write!(output, "{}", self.config.prompt())?;
                output.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read input")?;
            match self.handle_line(&line)? {
                Reply::Show(text) => writeln!(output, "{}", text)?,
                Reply::Silent => {}
                Reply::Quit => break,
            }
        }

        info!(steps = self.history.step_count(), "Session ended");
        Ok(())
    }
}

//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print each redraw as a JSON document instead of text
    #[arg(long)]
    pub json: bool,

    /// Tracing filter (overrides the config file; RUST_LOG wins over both)
    #[arg(long)]
    pub log_filter: Option<String>,
}

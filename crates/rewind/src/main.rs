//! Rewind - tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind::{Cli, OutputMode, Session, ShellConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ShellConfig::from_file(path)?,
        None => ShellConfig::default(),
    };
    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.clone());
    }

    // Logs go to stderr so stdout stays the game display.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    info!(?mode, "Starting rewind");

    let mut session = Session::new(config, mode);
    let stdin = std::io::stdin();
    session.run(stdin.lock(), std::io::stdout())
}

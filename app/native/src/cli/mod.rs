//! CLI module for Tessera.
//!
//! The CLI runs the tile layout against an in-memory platform: it computes
//! frames, renders layout symbols, replays window event scripts and manages
//! the configuration file.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;
use tracing_subscriber::EnvFilter;

use crate::error::TesseraError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TESSERA_LOG";

/// Runs the CLI.
///
/// Parses command-line arguments, installs the log subscriber and executes the
/// appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), TesseraError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute()
}

/// Installs a stderr log subscriber.
///
/// `--verbose` forces `debug`; otherwise `TESSERA_LOG` is used, falling back to
/// `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

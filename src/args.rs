//! Command-line arguments for the catalog driver.

use std::path::PathBuf;

use clap::Parser;

/// Browse the mock movie catalog from the terminal.
///
/// CLI values win over config file values.
#[derive(Debug, Parser)]
#[command(name = "filmoteca", version, about)]
pub struct Cli {
    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the simulated fetch delay in milliseconds.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Print state updates as JSON lines instead of formatted text.
    #[arg(long)]
    pub json: bool,
}

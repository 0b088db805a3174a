pub mod commands;

use clap::Parser;

pub use commands::Cli;

/// Parses the process arguments, exiting with a usage message on error.
pub fn parse() -> Cli {
    Cli::parse()
}

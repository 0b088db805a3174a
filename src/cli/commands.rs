use clap::Parser; // Import the `Parser` derive macro from the `clap` crate.
// `clap` is a popular Rust library for parsing command-line arguments.
use std::path::PathBuf; // Paths are kept as raw OS strings, so non-UTF-8 directories work.

/// Command-line interface for the `agesweep` utility.
///
/// This struct defines the command-line arguments for the `agesweep` application.
/// It uses `clap`'s derive macros for automatic parsing of arguments based on struct fields.
#[derive(Parser, Debug)] // Derive the `Parser` trait, which generates the code to parse command-line arguments.
#[command(
    name = "agesweep", // Sets the name of the executable, which appears in help messages.
    about = "Recursively delete files older than a given number of hours", // Short description of the application.
    version, // Automatically generates the version string from the Cargo.toml file.
)]
pub struct Cli {
    /// Directory to inspect recursively for old files
    #[arg(long, short = 'd')]
    pub directory: PathBuf, // Validated later; an empty string is rejected by `Config::new`.

    /// Files strictly older than this many hours are deleted
    ///
    /// Parsed as a signed number so that a negative value is reported by the
    /// configuration check instead of failing as an unknown flag.
    #[arg(long = "max-age-hours", short = 'a', allow_negative_numbers = true)]
    pub max_age_hours: i64,

    /// Show what would be deleted without deleting
    #[arg(long = "dry-run")]
    pub dry_run: bool, // A boolean flag; if present, `dry_run` will be `true`.

    /// Show debug messages
    #[arg(long)]
    pub debug: bool,

    /// Log every visited file (passed, failed, skipped)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_arguments() {
        let cli = Cli::try_parse_from(["agesweep", "-d", "/var/log/app", "-a", "48"]).unwrap();
        assert_eq!(cli.directory, PathBuf::from("/var/log/app"));
        assert_eq!(cli.max_age_hours, 48);
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn negative_age_reaches_validation() {
        let cli = Cli::try_parse_from([
            "agesweep",
            "--directory",
            "/tmp",
            "--max-age-hours",
            "-2",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.max_age_hours, -2);
        assert!(cli.dry_run);
    }

    #[test]
    fn directory_is_required() {
        assert!(Cli::try_parse_from(["agesweep", "-a", "1"]).is_err());
    }
}

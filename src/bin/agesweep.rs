use agesweep::cli::{self, Cli}; // Import the `cli` module and the parsed `Cli` arguments struct.
use agesweep::core::{Config, DeleteError, Deleter, FsRemover, SystemClock}; // Import the deletion engine and its production dependencies.
use agesweep::logger::is_debug_enabled; // Debug mode always shows the summary table.
use agesweep::{log_debug, log_error, log_info, log_warn, logger}; // Import custom logging macros and the `logger` initialization function.
use colored::Colorize; // Import the `Colorize` trait for colored terminal output.
use std::env; // For reading optional environment toggles.
use std::process; // For setting the exit status on failure.

/// The main entry point of the `agesweep` application.
///
/// This function is responsible for:
/// 1. Parsing command-line arguments.
/// 2. Initializing the logger based on the debug and verbose flags.
/// 3. Running the deletion pass through `run`.
/// 4. Reporting any error and exiting non-zero.
fn main() {
    let cli = cli::parse(); // Parse the command-line arguments into the `Cli` struct.

    // Initialize the logger. `--verbose` shows every visited file, `--debug` shows progress details.
    logger::init(cli.debug, cli.verbose);

    log_debug!("Starting with dry_run = {}", cli.dry_run.to_string().bright_blue());

    if let Err(e) = run(&cli) {
        // Bad arguments are reported before any I/O; a traversal error aborts the run midway.
        let heading = if e.is_validation() { "Invalid arguments" } else { "Deletion aborted" };
        log_error!("{}: {}", heading.bright_yellow(), e.to_string().bright_red());
        process::exit(1);
    }

    log_debug!("Finished execution.");
}

/// Validates the arguments, runs one deletion pass and prints its summary.
fn run(cli: &Cli) -> Result<(), DeleteError> {
    // Validate the arguments before touching the file system.
    let config = Config::new(cli.directory.as_path(), cli.max_age_hours)?;

    // Production dependencies live here, for the whole run, and are lent to the deleter.
    let clock = SystemClock::new();
    let remover = FsRemover::new(cli.dry_run);
    let mut deleter = Deleter::new(config, &clock, &remover);

    log_info!(
        "🧹 Deleting files older than {}h in {}",
        deleter.config().max_age_hours().to_string().bright_white(),
        deleter.config().directory().display().to_string().bright_green()
    );

    let outcome = deleter.execute();
    let results = deleter.results(); // Partial counters are still available after an error.

    // Print the table when anything was visited, or when asked to via the environment or `--debug`.
    if results.total() > 0 || env::var("AGESWEEP_SHOW_SUMMARY").is_ok() || is_debug_enabled() {
        results.print_stats(remover.is_dry_run());
    }

    if results.failed() > 0 {
        log_warn!("{} file(s) could not be deleted", results.failed().to_string().bright_yellow());
    }

    outcome?;
    log_info!("{}", results.summary_line().bright_white());
    Ok(())
}

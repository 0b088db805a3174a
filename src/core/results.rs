use crate::log_trace;
use colored::Colorize;
use std::fmt::Display;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

/// One row of the summary table printed after a run.
#[derive(Tabled, Clone)]
struct StatEntry {
    #[tabled(rename = "Outcome")]
    outcome: &'static str,
    #[tabled(rename = "Files")]
    count: u64,
}

/// Counters for the outcome of every regular file visited during a run.
///
/// Directories are never counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Results {
    passed: u64,
    failed: u64,
    skipped: u64,
}

impl Results {
    pub fn new() -> Self {
        Results::default()
    }

    /// Files that were old enough and got deleted.
    pub fn passed(&self) -> u64 {
        self.passed
    }

    /// Files that were old enough but could not be deleted.
    pub fn failed(&self) -> u64 {
        self.failed
    }

    /// Files that were too young to delete.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn total(&self) -> u64 {
        self.passed + self.failed + self.skipped
    }

    pub(crate) fn pass(&mut self, path: &Path) {
        log_trace!("passed: {}", path.display());
        self.passed += 1;
    }

    pub(crate) fn fail(&mut self, path: &Path, err: &dyn Display) {
        log_trace!("failed: {} with error '{}'", path.display(), err);
        self.failed += 1;
    }

    pub(crate) fn skip(&mut self, path: &Path) {
        log_trace!("skipped: {}", path.display());
        self.skipped += 1;
    }

    /// Deletion statistics as a one-liner, e.g. `passed: 3, failed: 0, skipped: 12`.
    pub fn summary_line(&self) -> String {
        format!(
            "passed: {}, failed: {}, skipped: {}",
            self.passed, self.failed, self.skipped
        )
    }

    /// Renders the counters as a table with one row per outcome plus a total.
    pub fn render_table(&self) -> String {
        let rows = vec![
            StatEntry { outcome: "Deleted", count: self.passed },
            StatEntry { outcome: "Failed", count: self.failed },
            StatEntry { outcome: "Skipped", count: self.skipped },
            StatEntry { outcome: "Total", count: self.total() },
        ];

        Table::new(rows).with(Style::modern()).to_string()
    }

    /// Prints the summary table to stdout under a heading.
    pub fn print_stats(&self, dry_run: bool) {
        if dry_run {
            println!("\n{}", "Deletion Summary (Dry Run)".bold().underline().purple());
        } else {
            println!("\n{}", "Deletion Summary".bold().underline().green());
        }
        println!("{}", self.render_table());
    }
}

use super::age::is_older_than;
use super::clock::Clock;
use super::error::DeleteError;
use super::remover::FileRemover;
use super::results::Results;
use crate::{log_debug, log_trace};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

/// Validated settings for one deletion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    directory: PathBuf,
    max_age_hours: u64,
}

impl Config {
    /// Checks the raw arguments and builds a `Config`.
    ///
    /// `max_age_hours` is signed so that a negative value coming from the
    /// command line is reported as a validation error instead of a parse error.
    pub fn new(directory: impl Into<PathBuf>, max_age_hours: i64) -> Result<Self, DeleteError> {
        let directory = directory.into();
        if directory.as_os_str().is_empty() {
            return Err(DeleteError::EmptyDirectory);
        }
        let max_age_hours = u64::try_from(max_age_hours)
            .map_err(|_| DeleteError::NegativeAge { hours: max_age_hours })?;

        Ok(Config {
            directory,
            max_age_hours,
        })
    }

    /// Starting directory which is inspected recursively.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Files must be strictly older than this many hours to be deleted.
    pub fn max_age_hours(&self) -> u64 {
        self.max_age_hours
    }
}

/// Walks a directory tree and deletes regular files older than the configured age.
///
/// The clock and remover are borrowed, so the caller decides which
/// implementations a run uses and keeps ownership of them.
pub struct Deleter<'a> {
    config: Config,
    clock: &'a dyn Clock,
    remover: &'a dyn FileRemover,
    results: Results,
}

impl<'a> Deleter<'a> {
    pub fn new(config: Config, clock: &'a dyn Clock, remover: &'a dyn FileRemover) -> Self {
        Deleter {
            config,
            clock,
            remover,
            results: Results::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Counters of the last (or current) run. After `execute` returned an
    /// error these reflect only the files handled before the failure.
    pub fn results(&self) -> Results {
        self.results
    }

    /// Runs one full pass over the configured directory.
    ///
    /// `now` is read from the clock once per call so every file is measured
    /// against the same cut-off. Counters are reset at the start of each call.
    ///
    /// A file that cannot be removed is counted as failed and the walk goes
    /// on. An entry the walk itself cannot read aborts the run with
    /// [`DeleteError::Traversal`].
    pub fn execute(&mut self) -> Result<Results, DeleteError> {
        self.results = Results::new();
        let now = self.clock.now();

        log_debug!(
            "Deleting files older than {}h under {}",
            self.config.max_age_hours,
            self.config.directory.display()
        );

        let walk = WalkDir::new(&self.config.directory)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walk {
            let entry = entry.map_err(|err| self.walk_error(err))?;
            self.visit(&entry, now)?;
        }

        log_debug!("Finished: {}", self.results.summary_line());
        Ok(self.results)
    }

    fn visit(&mut self, entry: &DirEntry, now: SystemTime) -> Result<(), DeleteError> {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            return Ok(());
        }
        if !file_type.is_file() {
            log_trace!("ignored non-regular entry: {}", entry.path().display());
            return Ok(());
        }

        let modified = entry
            .metadata()
            .map_err(io::Error::from)
            .and_then(|metadata| metadata.modified())
            .map_err(|source| DeleteError::Traversal {
                path: entry.path().to_path_buf(),
                source,
            })?;

        if is_older_than(self.config.max_age_hours, modified, now) {
            self.delete_file(entry.path());
        } else {
            self.results.skip(entry.path());
        }

        Ok(())
    }

    fn delete_file(&mut self, path: &Path) {
        match self.remover.remove(path) {
            Ok(()) => self.results.pass(path),
            Err(source) => {
                let err = DeleteError::Removal {
                    path: path.to_path_buf(),
                    source,
                };
                self.results.fail(path, &err);
            }
        }
    }

    fn walk_error(&self, err: walkdir::Error) -> DeleteError {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.directory.clone());
        DeleteError::Traversal {
            path,
            source: io::Error::from(err),
        }
    }
}

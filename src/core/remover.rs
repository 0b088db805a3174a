use crate::utils::filesystem::remove_file;
use std::io;
use std::path::Path;

/// Deletes a single file system entry.
///
/// Implementations decide what "delete" means. [`FsRemover`] talks to the real
/// file system; tests substitute removers that record or fail.
pub trait FileRemover {
    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// Removes files from disk, or only pretends to when `dry_run` is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRemover {
    dry_run: bool,
}

impl FsRemover {
    pub fn new(dry_run: bool) -> Self {
        FsRemover { dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl FileRemover for FsRemover {
    fn remove(&self, path: &Path) -> io::Result<()> {
        remove_file(path, self.dry_run)
    }
}

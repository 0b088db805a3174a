use crate::log_debug;
// Imports the `log_debug` macro for logging debug-level messages.
use std::fs;
// Imports the standard library's file system module for deleting files.
use std::io;
// Imports the standard library's I/O module, primarily for `io::Result` and `io::Error`.
use std::path::Path;
// Imports `Path` from the standard library, a universal type for file system paths.

/// Deletes a single non-directory entry at the given path.
///
/// Unlike a recursive cleanup, this never descends into directories: a
/// directory path is rejected by the operating system and reported as an error.
///
/// # Arguments
/// * `path` - A reference to a `Path` indicating the file to be removed.
/// * `dry_run` - A boolean flag. If `true`, the function will simulate the removal
///               without touching the file system.
///
/// # Errors
///
/// Returns an `io::Error` if the removal fails during an actual run (`dry_run` is `false`),
/// for example when permission is denied or the file was already removed.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use agesweep::utils::filesystem::remove_file;
/// // Actually remove a file.
/// remove_file(Path::new("/tmp/old.log"), false).expect("Failed to remove file");
/// // Only pretend to remove it.
/// remove_file(Path::new("/tmp/old.log"), true).expect("Failed to simulate removal");
/// ```
pub fn remove_file(path: &Path, dry_run: bool) -> io::Result<()> {
    // If `dry_run` is true, simulate the removal.
    if dry_run {
        log_debug!("Would remove: {}", path.display());
        return Ok(()); // In dry run, we simulate and return success without actual deletion.
    }

    log_debug!("Removing: {}", path.display());
    fs::remove_file(path) // A missing file is reported as `NotFound` rather than treated as success.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_to_remove_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();

        assert!(remove_file(&sub, false).is_err());
        assert!(sub.is_dir());
    }
}

// Error type shared by configuration and the deletion walk.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while configuring or running a [`Deleter`].
///
/// Validation errors are raised before any I/O happens. `Traversal` aborts a
/// run. `Removal` never escapes [`Deleter::execute`]: it is counted as a failed
/// file and logged.
///
/// [`Deleter`]: crate::core::deleter::Deleter
/// [`Deleter::execute`]: crate::core::deleter::Deleter::execute
#[derive(Debug)]
pub enum DeleteError {
    /// The configured directory was an empty string.
    EmptyDirectory,
    /// The configured maximum age was below zero.
    NegativeAge { hours: i64 },
    /// The walk could not read a directory or the metadata of an entry.
    Traversal { path: PathBuf, source: io::Error },
    /// A file old enough for deletion could not be removed.
    Removal { path: PathBuf, source: io::Error },
}

impl DeleteError {
    /// Returns `true` for errors produced by argument validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, DeleteError::EmptyDirectory | DeleteError::NegativeAge { .. })
    }

    /// The path the error is about, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            DeleteError::Traversal { path, .. } | DeleteError::Removal { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for DeleteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteError::EmptyDirectory => write!(f, "directory must not be empty"),
            DeleteError::NegativeAge { hours } => {
                write!(f, "file age must be zero or positive, got {} hours", hours)
            }
            DeleteError::Traversal { path, source } => {
                write!(f, "error while visiting path {:?}: {}", path, source)
            }
            DeleteError::Removal { path, source } => {
                write!(f, "could not remove {:?}: {}", path, source)
            }
        }
    }
}

impl Error for DeleteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DeleteError::Traversal { source, .. } | DeleteError::Removal { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_error_names_the_path_and_keeps_the_source() {
        let err = DeleteError::Traversal {
            path: PathBuf::from("/data/locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };

        let message = err.to_string();
        assert!(message.contains("\"/data/locked\""));
        assert!(message.contains("permission denied"));
        assert!(err.source().is_some());
        assert!(!err.is_validation());
        assert_eq!(err.path(), Some(&PathBuf::from("/data/locked")));
    }

    #[test]
    fn validation_errors_have_no_source() {
        assert!(DeleteError::EmptyDirectory.is_validation());
        assert!(DeleteError::NegativeAge { hours: -3 }.is_validation());
        assert!(DeleteError::EmptyDirectory.source().is_none());
        assert!(DeleteError::NegativeAge { hours: -3 }.to_string().contains("-3"));
    }
}

//! Age-based file deletion.
//!
//! [`Deleter`] walks a directory tree and removes regular files whose
//! modification time is older than a configured number of hours. Time and
//! removal are injected through the [`Clock`] and [`FileRemover`] traits.

pub mod age;
pub mod clock;
pub mod deleter;
pub mod error;
pub mod remover;
pub mod results;

pub use clock::{Clock, FixedClock, SystemClock};
pub use deleter::{Config, Deleter};
pub use error::DeleteError;
pub use remover::{FileRemover, FsRemover};
pub use results::Results;

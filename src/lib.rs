// Library crate for agesweep.
// Re-exports modules for use by the binary and the integration tests.

pub mod cli;
pub mod core;
pub mod logger;
pub mod utils;

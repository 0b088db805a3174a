//! Minimal leveled logger writing colored lines to stderr.
//!
//! The level is stored in a process-wide atomic and set once by [`init`].
//! Until `init` is called the logger behaves as if it were initialised at
//! [`Level::Info`], so library code can log freely from tests.

use colored::Colorize;
use std::env;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable that overrides the level chosen on the command line.
pub const LOG_ENV: &str = "AGESWEEP_LOG";

/// Severity of a log line. Lower values are more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl Level {
    /// Parses a level name as accepted by [`LOG_ENV`]. Case-insensitive.
    pub fn parse(name: &str) -> Option<Level> {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" => Some(Level::Error),
            "warn" | "warning" => Some(Level::Warn),
            "info" => Some(Level::Info),
            "debug" => Some(Level::Debug),
            "trace" => Some(Level::Trace),
            _ => None,
        }
    }

    fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Error,
            1 => Level::Warn,
            2 => Level::Info,
            3 => Level::Debug,
            _ => Level::Trace,
        }
    }

    fn tag(self) -> colored::ColoredString {
        match self {
            Level::Error => "[ERROR]".bright_red().bold(),
            Level::Warn => "[WARN]".bright_yellow().bold(),
            Level::Info => "[INFO]".bright_green().bold(),
            Level::Debug => "[DEBUG]".bright_blue(),
            Level::Trace => "[TRACE]".dimmed(),
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

/// Initialises the logger from the command-line flags.
///
/// `verbose` wins over `debug`. A valid [`LOG_ENV`] value wins over both.
pub fn init(debug: bool, verbose: bool) {
    let from_flags = if verbose {
        Level::Trace
    } else if debug {
        Level::Debug
    } else {
        Level::Info
    };

    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|value| Level::parse(&value))
        .unwrap_or(from_flags);

    set_level(level);
}

pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn level() -> Level {
    Level::from_u8(LEVEL.load(Ordering::Relaxed))
}

pub fn enabled(level: Level) -> bool {
    level <= self::level()
}

/// Returns `true` when debug (or trace) output is switched on.
pub fn is_debug_enabled() -> bool {
    enabled(Level::Debug)
}

#[doc(hidden)]
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    if enabled(level) {
        eprintln!("{} {}", level.tag(), args);
    }
}

#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        $crate::logger::write($crate::logger::Level::Trace, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::write($crate::logger::Level::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logger::write($crate::logger::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::write($crate::logger::Level::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::write($crate::logger::Level::Error, format_args!($($arg)*))
    };
}

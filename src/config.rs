//! Runtime configuration helpers.
//!
//! The only knob is the log level, given on the command line or through
//! `RUST_LOG`.

use tracing::Level;

use crate::error::{Error, Result};

/// Default log level when none is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Parses a log level string into a tracing [`Level`].
///
/// ## Errors
/// Returns [`Error::Config`] for anything other than
/// `trace`, `debug`, `info`, `warn` or `error`.
pub fn parse_log_level(s: &str) -> Result<Level> {
    match s.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(Error::Config(format!("invalid log level: {other}"))),
    }
}

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_filter(level: Level) -> String {
    format!("calculator={level}")
}

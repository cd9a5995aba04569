//! Log level parsing and subscriber setup

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;

use crate::error::{self, Result};

/// Parse a `--log-level` value
///
/// Accepts `panic`, `fatal`, `error`, `warn`, `warning`, `info`, `debug` and
/// `trace`, case-insensitively. `panic` and `fatal` log at error level.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    match level.to_ascii_lowercase().as_str() {
        "panic" | "fatal" | "error" => Ok(LevelFilter::ERROR),
        "warn" | "warning" => Ok(LevelFilter::WARN),
        "info" => Ok(LevelFilter::INFO),
        "debug" => Ok(LevelFilter::DEBUG),
        "trace" => Ok(LevelFilter::TRACE),
        _ => Err(error::options::invalid_log_level(format!(
            "not a valid log level: \"{level}\""
        ))),
    }
}

/// Install the global subscriber, writing to stderr
pub fn init(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

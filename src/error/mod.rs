//! Error types and handling for the shard validator
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! These are the fatal errors only: anything that stops the run before or
//! instead of a complete report. Per-file validation problems are
//! [`crate::check::Failure`] records, not errors.
//!
//! This module is organized into sub-modules by error domain:
//! - [`options`]: Command line option errors
//! - [`config`]: Plugin, CI operator and job configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod options;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for shard validator operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShardError {
    // Option errors
    #[error("required flag --{flag} was unset")]
    #[diagnostic(code(shard::options::missing_flag))]
    MissingFlag { flag: String },

    #[error("invalid --log-level: {reason}")]
    #[diagnostic(
        code(shard::options::invalid_log_level),
        help("Valid levels: panic, fatal, error, warn, warning, info, debug, trace")
    )]
    InvalidLogLevel { reason: String },

    #[error("Release repository not found at: {path}")]
    #[diagnostic(
        code(shard::options::repo_not_found),
        help("Point --release-repo-dir at a checkout of the release repository")
    )]
    RepoNotFound { path: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(shard::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(shard::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Directory not found: {path}")]
    #[diagnostic(code(shard::fs::dir_not_found))]
    DirNotFound { path: String },

    #[error("Failed to walk directory: {path}: {reason}")]
    #[diagnostic(code(shard::fs::walk_failed))]
    WalkFailed { path: String, reason: String },

    // Validation summary
    #[error(
        "Found configurations that do not belong to the correct auto-updating config ({count} failures)"
    )]
    #[diagnostic(
        code(shard::validation::failed),
        help("Each failure is logged above with the file and glob involved")
    )]
    ValidationFailed { count: usize },
}

impl From<walkdir::Error> for ShardError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map_or_else(|| "unknown".to_string(), |p| p.display().to_string());
        ShardError::WalkFailed {
            path,
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ShardError>;

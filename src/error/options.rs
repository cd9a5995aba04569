//! Command line option errors

use super::ShardError;

/// Creates a missing required flag error
pub fn missing_flag(flag: impl Into<String>) -> ShardError {
    ShardError::MissingFlag { flag: flag.into() }
}

/// Creates an invalid log level error
pub fn invalid_log_level(reason: impl Into<String>) -> ShardError {
    ShardError::InvalidLogLevel {
        reason: reason.into(),
    }
}

/// Creates a release repository not found error
pub fn repo_not_found(path: impl Into<String>) -> ShardError {
    ShardError::RepoNotFound { path: path.into() }
}

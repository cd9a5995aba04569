//! Configuration errors

use super::ShardError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ShardError {
    ShardError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ShardError {
    ShardError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

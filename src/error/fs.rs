//! File system errors

use super::ShardError;

/// Creates a directory not found error
pub fn dir_not_found(path: impl Into<String>) -> ShardError {
    ShardError::DirNotFound { path: path.into() }
}

//! Glob matching for config-updater patterns
//!
//! Matching sits behind [`GlobMatcher`] so checks can run against a
//! different engine in tests. The default engine is wax: `*` stays inside
//! one path component and `**` spans any number of components.

use thiserror::Error;
use wax::{CandidatePath, Glob, Pattern};

/// A pattern that could not be compiled
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid glob '{pattern}': {reason}")]
pub struct GlobError {
    pub pattern: String,
    pub reason: String,
}

/// Fallible `pattern -> path -> bool` matching
pub trait GlobMatcher {
    /// Check whether `path` (forward slashes, repository relative) matches `pattern`
    fn is_match(&self, pattern: &str, path: &str) -> Result<bool, GlobError>;
}

/// Default matcher backed by wax
#[derive(Debug, Default, Clone, Copy)]
pub struct WaxMatcher;

impl GlobMatcher for WaxMatcher {
    fn is_match(&self, pattern: &str, path: &str) -> Result<bool, GlobError> {
        let glob = Glob::new(pattern).map_err(|e| GlobError {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        let candidate = CandidatePath::from(path);
        Ok(glob.matched(&candidate).is_some())
    }
}

//! Configuration file handling for the shard validator
//!
//! This module contains data structures for:
//! - `_plugins.yaml` - Prow plugin configuration with the config-updater maps
//! - `ci-operator/config/**.yaml` - CI operator configurations
//! - `ci-operator/jobs/**.yaml` - Prow job configurations

pub mod ci_operator;
pub mod jobs;
pub mod plugins;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{self, Result};

// Re-export commonly used types
pub use jobs::{JobConfig, JobKind};
pub use plugins::{PluginConfig, RuleSet};

/// Read and parse a YAML file, mapping failures to config errors naming the file
pub(crate) fn read_yaml<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let content = std::fs::read_to_string(path)
        .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

    if content.trim().is_empty() {
        return Ok(T::default());
    }

    serde_yaml::from_str(&content)
        .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))
}

//! CI operator configuration files
//!
//! The validator only needs to know that a file is a well-formed
//! configuration document; its bundle is derived from the file's location.
//! The generated metadata block is read so that diagnostics can mention it.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// A CI operator configuration, reduced to what the validator reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CiOperatorConfig {
    #[serde(default)]
    pub zz_generated_metadata: Option<Metadata>,
}

/// Generated `org/repo@branch` metadata stamped into each configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub variant: Option<String>,
}

impl CiOperatorConfig {
    /// Load a configuration file, failing if it is not a YAML mapping
    pub fn load(path: &Path) -> Result<Self> {
        super::read_yaml(path)
    }
}

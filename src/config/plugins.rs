//! Prow plugin configuration (`_plugins.yaml`)
//!
//! Only the `config_updater.maps` section is modelled:
//!
//! ```yaml
//! config_updater:
//!   maps:
//!     ci-operator/config/**/*-master.yaml:
//!       name: ci-operator-master-configs
//!       clusters:
//!         app.ci:
//!         - ci
//!     ci-operator/jobs/**/*-master-*.yaml:
//!       name: job-config-master
//!       gzip: true
//!       clusters:
//!         app.ci:
//!         - ci
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{self, Result};

/// Reserved cluster alias that config-updater maps must not name explicitly
pub const DEFAULT_CLUSTER_ALIAS: &str = "default";

/// Glob pattern -> bundle, ordered by pattern
pub type RuleSet = BTreeMap<String, BundleDescriptor>;

/// Plugin configuration, reduced to what the validator reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub config_updater: ConfigUpdater,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigUpdater {
    #[serde(default)]
    pub maps: RuleSet,
}

/// One auto-updating config map
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BundleDescriptor {
    /// Config map name
    pub name: String,

    /// Cluster alias -> namespaces the map is synced into
    #[serde(default)]
    pub clusters: BTreeMap<String, Option<Vec<String>>>,

    /// Whether file contents are gzipped in the map (unset means disabled)
    #[serde(default)]
    pub gzip: Option<bool>,
}

impl BundleDescriptor {
    pub fn has_cluster_alias(&self, alias: &str) -> bool {
        self.clusters.contains_key(alias)
    }

    pub fn gzip_enabled(&self) -> bool {
        self.gzip.unwrap_or(false)
    }
}

#[cfg(test)]
impl BundleDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper for adding a cluster alias
    #[must_use]
    pub fn with_cluster(mut self, alias: impl Into<String>) -> Self {
        self.clusters.insert(alias.into(), None);
        self
    }

    /// Builder-style helper for setting the gzip flag
    #[must_use]
    pub fn with_gzip(mut self, gzip: bool) -> Self {
        self.gzip = Some(gzip);
        self
    }
}

impl PluginConfig {
    /// Parse plugin configuration from a YAML string
    #[cfg(test)]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| error::config::parse_failed("<string>", e.to_string()))
    }

    /// Load plugin configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(error::config::read_failed(
                path.display().to_string(),
                "file does not exist",
            ));
        }
        super::read_yaml(path)
    }

    /// Consume the configuration, keeping only the config-updater rules
    pub fn into_rules(self) -> RuleSet {
        self.config_updater.maps
    }
}

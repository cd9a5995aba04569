//! Fixed locations inside the release repository

use std::path::{Path, PathBuf};

/// Prow plugin configuration holding the config-updater maps
pub const PLUGIN_CONFIG_IN_REPO_PATH: &str = "core-services/prow/02_config/_plugins.yaml";

/// CI operator configuration tree
pub const CIOP_CONFIG_IN_REPO_PATH: &str = "ci-operator/config";

/// Prow job configuration tree, also the path probed by the gzip rule
pub const JOB_CONFIG_IN_REPO_PATH: &str = "ci-operator/jobs";

/// Resolved locations for one release repository checkout
#[derive(Debug, Clone)]
pub struct RepoLayout {
    pub root: PathBuf,
}

impl RepoLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn plugin_config(&self) -> PathBuf {
        self.root.join(PLUGIN_CONFIG_IN_REPO_PATH)
    }

    pub fn ciop_config_dir(&self) -> PathBuf {
        self.root.join(CIOP_CONFIG_IN_REPO_PATH)
    }

    pub fn job_config_dir(&self) -> PathBuf {
        self.root.join(JOB_CONFIG_IN_REPO_PATH)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

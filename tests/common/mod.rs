//! Common test utilities for shard validator integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

#[allow(dead_code)]
pub const PLUGIN_CONFIG: &str = "core-services/prow/02_config/_plugins.yaml";

/// Plugin config with one master shard for configs and one for jobs
pub const MASTER_PLUGINS: &str = r"
config_updater:
  maps:
    ci-operator/config/**/*-master.yaml:
      name: ci-operator-master-configs
      clusters:
        app.ci:
        - ci
    ci-operator/jobs/**/*-master-*.yaml:
      name: job-config-master
      gzip: true
      clusters:
        app.ci:
        - ci
";

/// A release repository checkout for integration tests
pub struct TestRepo {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to repository root
    pub path: PathBuf,
}

impl TestRepo {
    /// Create an empty repository with the config and job trees in place
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let repo = Self { temp, path };
        std::fs::create_dir_all(repo.path.join("ci-operator/config"))
            .expect("Failed to create config directory");
        std::fs::create_dir_all(repo.path.join("ci-operator/jobs"))
            .expect("Failed to create jobs directory");
        repo
    }

    /// Create a repository whose configs and jobs all sit in the master shards
    #[allow(dead_code)]
    pub fn consistent() -> Self {
        let repo = Self::new();
        repo.write_file(PLUGIN_CONFIG, MASTER_PLUGINS);
        repo.write_file(
            "ci-operator/config/org/repo/org-repo-master.yaml",
            "zz_generated_metadata:\n  org: org\n  repo: repo\n  branch: master\n",
        );
        repo.write_file(
            "ci-operator/jobs/org/repo/org-repo-master-presubmits.yaml",
            &presubmit_injecting("ci-operator-master-configs", "org-repo-master.yaml"),
        );
        repo
    }

    /// Write a file in the repository
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Validator command pointed at this repository
    #[allow(dead_code)]
    pub fn validator_cmd(&self) -> Command {
        let mut cmd = validator_cmd();
        cmd.arg("--release-repo-dir").arg(&self.path);
        cmd
    }
}

/// Validator command without arguments
#[allow(deprecated)]
pub fn validator_cmd() -> Command {
    let mut cmd = Command::cargo_bin("config-shard-validator").expect("Failed to find binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Presubmit job file injecting `key` from config map `bundle`
#[allow(dead_code)]
pub fn presubmit_injecting(bundle: &str, key: &str) -> String {
    format!(
        r"presubmits:
  org/repo:
  - name: pull-ci-org-repo-master-unit
    spec:
      containers:
      - args:
        - --target=unit
        env:
        - name: CONFIG_SPEC
          valueFrom:
            configMapKeyRef:
              name: {bundle}
              key: {key}
"
    )
}

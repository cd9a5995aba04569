//! CI operator configuration inventory

use std::path::Path;

use tracing::debug;

use super::{ConfigIndex, PathRecord, yaml_files};
use crate::config::ci_operator::CiOperatorConfig;
use crate::error::Result;
use crate::naming::{ConfigKind, FileInfo};
use crate::path_utils;

/// Every CI operator configuration file, plus the key index for injection checks
#[derive(Debug, Clone, Default)]
pub struct ConfigInventory {
    pub records: Vec<PathRecord>,
    pub index: ConfigIndex,
}

/// Walk `config_dir` and record every CI operator configuration in it
pub fn build_config_inventory(repo_root: &Path, config_dir: &Path) -> Result<ConfigInventory> {
    let mut inventory = ConfigInventory::default();

    for path in yaml_files(config_dir)? {
        let config = CiOperatorConfig::load(&path)?;
        let info = FileInfo::from_path(config_dir, &path, ConfigKind::CiOperator);
        let record = PathRecord::new(path_utils::relative_to(repo_root, &path), info.bundle_name());

        if let Some(metadata) = &config.zz_generated_metadata {
            if info.branch.as_deref() != Some(metadata.branch.as_str()) {
                debug!(
                    source_file = %record.path,
                    org = %metadata.org,
                    repo = %metadata.repo,
                    branch = %metadata.branch,
                    variant = metadata.variant.as_deref().unwrap_or(""),
                    "Generated metadata branch differs from the file name."
                );
            }
        }

        debug!(
            source_file = %record.path,
            bundle = %record.bundle,
            org = info.org.as_deref().unwrap_or(""),
            repo = info.repo.as_deref().unwrap_or(""),
            variant = info.variant.as_deref().unwrap_or(""),
            "Found CI operator configuration."
        );

        inventory.index.insert(info.key().to_string(), record.clone());
        inventory.records.push(record);
    }

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShardError;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_records_and_index() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(
            root,
            "ci-operator/config/org/repo/org-repo-master.yaml",
            "tests: []\n",
        );
        write(
            root,
            "ci-operator/config/org/repo/org-repo-release-4.3.yaml",
            "tests: []\n",
        );

        let inventory = build_config_inventory(root, &root.join("ci-operator/config")).unwrap();
        assert_eq!(
            inventory.records,
            vec![
                PathRecord::new(
                    "ci-operator/config/org/repo/org-repo-master.yaml",
                    "ci-operator-master-configs"
                ),
                PathRecord::new(
                    "ci-operator/config/org/repo/org-repo-release-4.3.yaml",
                    "ci-operator-4.3-configs"
                ),
            ]
        );
        assert_eq!(
            inventory.index["org-repo-release-4.3.yaml"].bundle,
            "ci-operator-4.3-configs"
        );
    }

    #[test]
    fn test_unparseable_config_is_fatal() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(
            root,
            "ci-operator/config/org/repo/org-repo-master.yaml",
            "tests: [unclosed\n",
        );

        let err = build_config_inventory(root, &root.join("ci-operator/config")).unwrap_err();
        assert!(matches!(err, ShardError::ConfigParseFailed { .. }));
        assert!(err.to_string().contains("org-repo-master.yaml"));
    }
}

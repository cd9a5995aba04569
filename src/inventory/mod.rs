//! Inventories of configuration files found in the release repository
//!
//! This module handles:
//! - Walking the CI operator config tree into [`PathRecord`]s and a [`ConfigIndex`]
//! - Walking the job config tree into [`PathRecord`]s and [`InjectionReference`]s
//!
//! Both walks are fail-fast: the first unreadable directory or unparseable
//! file aborts the run.

pub mod configs;
pub mod jobs;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::JobKind;
use crate::error::{self, Result};

pub use configs::build_config_inventory;
pub use jobs::build_job_inventory;

/// A discovered file and the bundle it is expected to belong to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord {
    /// Repository-relative path with forward slashes
    pub path: String,
    /// Expected bundle name
    pub bundle: String,
}

impl PathRecord {
    pub fn new(path: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            bundle: bundle.into(),
        }
    }
}

/// Where an injection reference was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub source_file: String,
    pub job_kind: JobKind,
    pub job: String,
    pub container: usize,
}

/// A `CONFIG_SPEC` variable sourced from a config map key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionReference {
    pub key: String,
    pub bundle: String,
    pub location: SourceLocation,
}

/// Configuration key (file basename) -> record of the file it came from
pub type ConfigIndex = BTreeMap<String, PathRecord>;

/// All `.yaml` files under `dir`, in a stable walk order
fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(error::fs::dir_not_found(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "yaml")
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_files_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::create_dir_all(root.join("b/sub")).unwrap();
        std::fs::create_dir_all(root.join("a")).unwrap();
        std::fs::write(root.join("b/sub/z.yaml"), "").unwrap();
        std::fs::write(root.join("a/y.yaml"), "").unwrap();
        std::fs::write(root.join("a/OWNERS"), "").unwrap();
        std::fs::write(root.join("a/x.json"), "{}").unwrap();

        let files: Vec<_> = yaml_files(root)
            .unwrap()
            .into_iter()
            .map(|p| crate::path_utils::relative_to(root, &p))
            .collect();
        assert_eq!(files, vec!["a/y.yaml", "b/sub/z.yaml"]);
    }

    #[test]
    fn test_yaml_files_missing_dir() {
        let temp = TempDir::new().unwrap();
        let err = yaml_files(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, crate::error::ShardError::DirNotFound { .. }));
    }
}

//! Expected bundle names derived from file locations
//!
//! Files live at `<tree>/<org>/<repo>/<org>-<repo>-<branch>[__<variant>]<suffix>.yaml`,
//! where job files carry a `-presubmits`, `-postsubmits` or `-periodics`
//! suffix. The branch picks a flavor, and the flavor picks the bundle:
//!
//! | branch                                   | flavor   |
//! |------------------------------------------|----------|
//! | `master`, `main`                         | itself   |
//! | `release-3.N`, `enterprise-3.N`, `openshift-3.N` | `3.x` |
//! | `release-4.N`, `enterprise-4.N`, `openshift-4.N` | `4.N` |
//! | anything else, or no parsable branch     | `misc`   |

use std::path::{Component, Path};

const MISC_FLAVOR: &str = "misc";
const VERSIONED_BRANCH_PREFIXES: &[&str] = &["release-", "enterprise-", "openshift-"];
const JOB_FILE_SUFFIXES: &[&str] = &["-presubmits", "-postsubmits", "-periodics"];

/// Which tree a file was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    /// `ci-operator/config`
    CiOperator,
    /// `ci-operator/jobs`
    Job,
}

/// Location-derived facts about one configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub kind: ConfigKind,
    pub basename: String,
    pub org: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub variant: Option<String>,
}

impl FileInfo {
    /// Derive info for `path`, found while walking `tree_root`
    pub fn from_path(tree_root: &Path, path: &Path, kind: ConfigKind) -> Self {
        let basename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let relative = path.strip_prefix(tree_root).unwrap_or(path);
        let parts: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().to_string()),
                _ => None,
            })
            .collect();

        let mut info = Self {
            kind,
            basename,
            org: None,
            repo: None,
            branch: None,
            variant: None,
        };

        if let [org, repo, _file] = parts.as_slice() {
            if let Some((branch, variant)) = parse_branch(&info.basename, org, repo, kind) {
                info.branch = Some(branch);
                info.variant = variant;
            }
            info.org = Some(org.clone());
            info.repo = Some(repo.clone());
        }

        info
    }

    /// Flavor of this file's branch
    pub fn flavor(&self) -> String {
        self.branch
            .as_deref()
            .map_or_else(|| MISC_FLAVOR.to_string(), flavor_for_branch)
    }

    /// Name of the bundle (config map) this file must be synced into
    pub fn bundle_name(&self) -> String {
        match self.kind {
            ConfigKind::CiOperator => format!("ci-operator-{}-configs", self.flavor()),
            ConfigKind::Job => format!("job-config-{}", self.flavor()),
        }
    }

    /// Key under which the file is stored in its bundle
    pub fn key(&self) -> &str {
        &self.basename
    }
}

fn parse_branch(
    basename: &str,
    org: &str,
    repo: &str,
    kind: ConfigKind,
) -> Option<(String, Option<String>)> {
    let stem = basename.strip_suffix(".yaml")?;
    let mut rest = stem.strip_prefix(&format!("{org}-{repo}-"))?;

    if kind == ConfigKind::Job {
        rest = JOB_FILE_SUFFIXES
            .iter()
            .find_map(|suffix| rest.strip_suffix(suffix))
            .unwrap_or(rest);
    }

    let (branch, variant) = match rest.split_once("__") {
        Some((branch, variant)) => (branch, Some(variant.to_string())),
        None => (rest, None),
    };

    if branch.is_empty() {
        return None;
    }
    Some((branch.to_string(), variant))
}

/// Map a branch name to its flavor
pub fn flavor_for_branch(branch: &str) -> String {
    if branch == "master" || branch == "main" {
        return branch.to_string();
    }

    let version = VERSIONED_BRANCH_PREFIXES
        .iter()
        .find_map(|prefix| branch.strip_prefix(prefix));

    match version.and_then(|v| split_version(v).map(|parts| (v, parts))) {
        Some((_, ("3", _))) => "3.x".to_string(),
        Some((v, ("4", _))) => v.to_string(),
        _ => MISC_FLAVOR.to_string(),
    }
}

fn split_version(version: &str) -> Option<(&str, &str)> {
    let (major, minor) = version.split_once('.')?;
    let is_number = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    (is_number(major) && is_number(minor)).then_some((major, minor))
}

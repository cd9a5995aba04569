//! Cross-platform path utilities
//!
//! Glob patterns in the plugin configuration are written with forward
//! slashes, so every path handed to the matcher goes through here first.

use std::path::Path;

/// Convert a path to a forward-slash string.
///
/// ```ignore
/// let forward = to_forward_slashes(Path::new("ci-operator\\config\\a.yaml"));
/// assert_eq!(forward, "ci-operator/config/a.yaml");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Path of `path` relative to `root`, with forward slashes.
///
/// Paths that are not under `root` are returned unchanged.
pub fn relative_to(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    to_forward_slashes(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_to_forward_slashes() {
        assert_eq!(
            to_forward_slashes(Path::new("ci-operator\\jobs\\org\\repo")),
            "ci-operator/jobs/org/repo"
        );
        assert_eq!(to_forward_slashes(Path::new("a/b/c.yaml")), "a/b/c.yaml");
    }

    #[test]
    fn test_relative_to_strips_root() {
        let root = PathBuf::from("/release");
        let path = root.join("ci-operator/config/org/repo/org-repo-master.yaml");
        assert_eq!(
            relative_to(&root, &path),
            "ci-operator/config/org/repo/org-repo-master.yaml"
        );
    }

    #[test]
    fn test_relative_to_outside_root() {
        let root = PathBuf::from("/release");
        let path = PathBuf::from("/elsewhere/a.yaml");
        assert_eq!(relative_to(&root, &path), "/elsewhere/a.yaml");
    }
}

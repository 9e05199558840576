//! Project directory probes.

use std::path::Path;
use std::process::Command;

/// Lockfile expected at the project root.
pub const LOCKFILE: &str = "package-lock.json";

/// Dependency directory expected at the project root.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Check whether the project root is inside a git working tree.
///
/// Probed via `git rev-parse --git-dir`, which also covers being in a
/// subdirectory of a repository. Reports `false` when git itself is
/// absent.
pub fn is_git_repo(project_root: &Path) -> bool {
    Command::new("git")
        .arg("-C")
        .arg(project_root)
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Check whether `package-lock.json` exists at the project root.
pub fn has_lockfile(project_root: &Path) -> bool {
    project_root.join(LOCKFILE).exists()
}

/// Check whether a `node_modules` entry exists at the project root.
pub fn has_dependency_dir(project_root: &Path) -> bool {
    project_root.join(DEPENDENCY_DIR).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lockfile_detected_when_present() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(LOCKFILE), "{}").unwrap();
        assert!(has_lockfile(temp.path()));
    }

    #[test]
    fn lockfile_absent_reports_false() {
        let temp = TempDir::new().unwrap();
        assert!(!has_lockfile(temp.path()));
    }

    #[test]
    fn lockfile_probe_is_idempotent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(LOCKFILE), "{}").unwrap();
        assert!(has_lockfile(temp.path()));
        assert!(has_lockfile(temp.path()));
        fs::remove_file(temp.path().join(LOCKFILE)).unwrap();
        assert!(!has_lockfile(temp.path()));
    }

    #[test]
    fn dependency_dir_detected_when_present() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(DEPENDENCY_DIR)).unwrap();
        assert!(has_dependency_dir(temp.path()));
    }

    #[test]
    fn dependency_dir_absent_reports_false() {
        let temp = TempDir::new().unwrap();
        assert!(!has_dependency_dir(temp.path()));
    }

    #[test]
    fn fresh_temp_dir_is_not_a_git_repo() {
        let temp = TempDir::new().unwrap();
        // Either git is absent (false) or the temp dir is outside any
        // working tree (also false).
        assert!(!is_git_repo(temp.path()));
    }
}

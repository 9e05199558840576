//! Command-based probes.
//!
//! All tool checks go through `<tool> --version`: it is fast, read-only,
//! and universally supported by the tools we care about. Output is
//! captured (never inherited) so a chatty tool cannot scribble over the
//! report.

use std::process::Command;

/// Check whether invoking `command --version` exits zero.
///
/// Any failure mode — binary missing, non-zero exit, spawn error —
/// reports `false`. No distinction is made between "not installed" and
/// "installed but erroring".
pub fn command_succeeds(command: &str) -> bool {
    let ok = Command::new(command)
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    tracing::debug!(command, ok, "version probe");
    ok
}

/// Run `command --version` and return the trimmed stdout, if the
/// invocation succeeds.
pub fn version_output(command: &str) -> Option<String> {
    let output = Command::new(command).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout)
    }
}

/// Extract a version number from version-query output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_succeeds_false_for_missing_binary() {
        assert!(!command_succeeds("this-command-does-not-exist-12345"));
    }

    #[test]
    fn command_succeeds_is_deterministic() {
        let first = command_succeeds("this-command-does-not-exist-12345");
        let second = command_succeeds("this-command-does-not-exist-12345");
        assert_eq!(first, second);
    }

    #[test]
    fn version_output_none_for_missing_binary() {
        assert!(version_output("this-command-does-not-exist-12345").is_none());
    }

    #[test]
    fn extract_version_semver() {
        let output = "git version 2.43.0";
        assert_eq!(extract_version(output), Some("2.43.0".to_string()));
    }

    #[test]
    fn extract_version_with_v_prefix() {
        let output = "v22.11.0";
        assert_eq!(extract_version(output), Some("22.11.0".to_string()));
    }

    #[test]
    fn extract_version_no_match() {
        assert!(extract_version("no version here").is_none());
    }
}

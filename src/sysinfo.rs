//! Host platform and tool version collection.

use std::io::Write;
use std::process::Command;

use crate::checks::{extract_version, version_output};
use crate::error::Result;
use crate::ui::Theme;

/// A snapshot of the host environment, collected once per run.
#[derive(Debug, Clone)]
pub struct SystemInfo {
    /// Platform identifier (`linux`, `macos`, `windows`, ...).
    pub platform: &'static str,
    /// CPU architecture identifier.
    pub arch: &'static str,
    /// Kernel name and release, when the OS exposes it.
    pub os_release: Option<String>,
    /// Installed Node.js version string, when Node.js responds.
    pub node: Option<String>,
    /// Installed npm version string, when npm responds.
    pub npm: Option<String>,
}

impl SystemInfo {
    /// Collect system information from the host.
    pub fn collect() -> Self {
        Self {
            platform: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            os_release: os_release(),
            node: version_output("node"),
            // Some npm shims print PATH warnings before the version;
            // pull out just the number.
            npm: version_output("npm").map(|raw| extract_version(&raw).unwrap_or(raw)),
        }
    }

    /// Render the system information section.
    pub fn render(&self, theme: &Theme, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", theme.format_section("System Information"))?;
        writeln!(out, "Platform: {}", self.platform)?;
        writeln!(out, "Architecture: {}", self.arch)?;
        writeln!(
            out,
            "OS: {}",
            self.os_release.as_deref().unwrap_or("unknown")
        )?;
        writeln!(out, "Node.js: {}", self.node.as_deref().unwrap_or("not found"))?;
        writeln!(out, "npm: {}", self.npm.as_deref().unwrap_or("not found"))?;
        Ok(())
    }
}

/// Query the kernel name and release.
///
/// Uses `uname -sr` on Unix-likes. On Windows the version is not worth
/// a subprocess; the platform line already identifies the family.
fn os_release() -> Option<String> {
    if cfg!(windows) {
        return None;
    }
    let output = Command::new("uname").arg("-sr").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let release = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if release.is_empty() {
        None
    } else {
        Some(release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic() -> SystemInfo {
        SystemInfo {
            platform: "linux",
            arch: "x86_64",
            os_release: Some("Linux 6.8.0".to_string()),
            node: Some("v22.11.0".to_string()),
            npm: Some("10.9.0".to_string()),
        }
    }

    #[test]
    fn render_lists_every_field() {
        let theme = Theme::plain();
        let mut out = Vec::new();
        synthetic().render(&theme, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("System Information"));
        assert!(text.contains("Platform: linux"));
        assert!(text.contains("Architecture: x86_64"));
        assert!(text.contains("OS: Linux 6.8.0"));
        assert!(text.contains("Node.js: v22.11.0"));
        assert!(text.contains("npm: 10.9.0"));
    }

    #[test]
    fn render_shows_not_found_for_absent_tools() {
        let info = SystemInfo {
            node: None,
            npm: None,
            os_release: None,
            ..synthetic()
        };
        let theme = Theme::plain();
        let mut out = Vec::new();
        info.render(&theme, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Node.js: not found"));
        assert!(text.contains("npm: not found"));
        assert!(text.contains("OS: unknown"));
    }

    #[test]
    fn collect_fills_platform_and_arch() {
        let info = SystemInfo::collect();
        assert!(!info.platform.is_empty());
        assert!(!info.arch.is_empty());
    }
}

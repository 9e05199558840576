//! Orchestration of the full diagnostic pass.
//!
//! The auditor runs one linear sequence: banner, system info, six
//! checks, recommendations, platform notes, quick start, resources.
//! Nothing here retries, branches, or exits early; a fully-false result
//! set just produces the full recommendation list.

use std::io::Write;
use std::path::PathBuf;

use crate::checks::{
    command_succeeds, has_dependency_dir, has_lockfile, is_git_repo, node_version,
    version_meets_minimum, CheckResults, DEPENDENCY_DIR, LOCKFILE, MIN_NODE_MAJOR,
};
use crate::error::Result;
use crate::guide;
use crate::report::recommendations;
use crate::sysinfo::SystemInfo;
use crate::ui::{CheckStatus, Theme};

/// Runs the diagnostic sequence against one project directory.
#[derive(Debug)]
pub struct Auditor {
    project_root: PathBuf,
    theme: Theme,
    platform: &'static str,
}

impl Auditor {
    /// Create an auditor for a project root, using the host platform.
    pub fn new(project_root: PathBuf, theme: Theme) -> Self {
        Self {
            project_root,
            theme,
            platform: std::env::consts::OS,
        }
    }

    /// Override the platform identifier (for the Windows-notes gate).
    pub fn with_platform(mut self, platform: &'static str) -> Self {
        self.platform = platform;
        self
    }

    /// Run the full diagnostic pass, writing the report to `out`.
    ///
    /// Returns the aggregated check results. Never fails on a probe;
    /// errors only surface from writing to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<CheckResults> {
        guide::render_banner(&self.theme, out)?;

        SystemInfo::collect().render(&self.theme, out)?;

        let results = self.run_checks(out)?;
        tracing::debug!(?results, "check phase complete");

        self.render_recommendations(&results, out)?;
        guide::render_windows_notes(self.platform, &self.theme, out)?;
        guide::render_quick_start(&self.theme, out)?;
        guide::render_resources(&self.theme, out)?;

        Ok(results)
    }

    /// Run the six probes in fixed order, one status line each.
    fn run_checks(&self, out: &mut impl Write) -> Result<CheckResults> {
        writeln!(out, "{}", self.theme.format_section("Checking Prerequisites"))?;

        let node = self.check_node(out)?;
        let npm = self.check_tool("npm", "npm", out)?;
        let git = self.check_tool("git", "Git", out)?;

        writeln!(out, "{}", self.theme.format_section("Checking Project Setup"))?;

        let git_repo = is_git_repo(&self.project_root);
        self.report_line(
            git_repo,
            "Git repository initialized",
            "Not a git repository",
            true,
            out,
        )?;

        let package_lock = has_lockfile(&self.project_root);
        self.report_line(
            package_lock,
            &format!("{} exists", LOCKFILE),
            &format!("{} not found", LOCKFILE),
            true,
            out,
        )?;

        let node_modules = has_dependency_dir(&self.project_root);
        self.report_line(
            node_modules,
            &format!("{} directory exists", DEPENDENCY_DIR),
            &format!("{} directory not found", DEPENDENCY_DIR),
            true,
            out,
        )?;

        Ok(CheckResults {
            node,
            npm,
            git,
            git_repo,
            package_lock,
            node_modules,
        })
    }

    /// Check Node.js presence and version, printing one line.
    fn check_node(&self, out: &mut impl Write) -> Result<bool> {
        match node_version() {
            None => {
                writeln!(out, "{}", self.theme.format_fail("Node.js is not installed"))?;
                Ok(false)
            }
            Some(version) => {
                let ok = version_meets_minimum(&version);
                if ok {
                    writeln!(
                        out,
                        "{}",
                        self.theme.format_pass(&format!(
                            "Node.js {} (>= {}.0.0 required)",
                            version, MIN_NODE_MAJOR
                        ))
                    )?;
                } else {
                    writeln!(
                        out,
                        "{}",
                        self.theme.format_fail(&format!(
                            "Node.js {} is too old (>= {}.0.0 required)",
                            version, MIN_NODE_MAJOR
                        ))
                    )?;
                }
                Ok(ok)
            }
        }
    }

    /// Check a tool via its version query, printing one line.
    fn check_tool(&self, command: &str, display: &str, out: &mut impl Write) -> Result<bool> {
        let ok = command_succeeds(command);
        self.report_line(
            ok,
            &format!("{} is installed", display),
            &format!("{} is not installed", display),
            false,
            out,
        )?;
        Ok(ok)
    }

    /// Print one check line with the status icon and color.
    fn report_line(
        &self,
        passed: bool,
        pass_msg: &str,
        fail_msg: &str,
        advisory: bool,
        out: &mut impl Write,
    ) -> Result<()> {
        let status = CheckStatus::from_outcome(passed, advisory);
        let msg = if passed { pass_msg } else { fail_msg };
        writeln!(out, "{}", status.format(&self.theme, msg))?;
        Ok(())
    }

    /// Render the recommendations section for a result set.
    fn render_recommendations(&self, results: &CheckResults, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.theme.format_section("Recommendations"))?;

        let issues = recommendations(results);
        if issues.is_empty() {
            writeln!(
                out,
                "{}",
                self.theme.format_pass(
                    "All checks passed! You're ready to build and run Gemini CLI."
                )
            )?;
            writeln!(out, "\n{}", self.theme.highlight.apply_to("Next steps:"))?;
            writeln!(out, "  1. npm run build")?;
            writeln!(out, "  2. npm start")?;
            return Ok(());
        }

        writeln!(
            out,
            "{}\n",
            self.theme.warning.apply_to("⚠ Some issues were found:")
        )?;
        for (index, issue) in issues.iter().enumerate() {
            writeln!(
                out,
                "{}",
                self.theme
                    .error
                    .apply_to(format!("{}. {}", index + 1, issue.problem))
            )?;
            writeln!(
                out,
                "{}",
                self.theme.info.apply_to(format!("   → {}", issue.solution))
            )?;
            writeln!(out)?;
        }
        Ok(())
    }
}

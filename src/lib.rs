//! Preflight - Quick setup checks and diagnostics for Gemini CLI.
//!
//! Preflight audits the host machine and the current project directory
//! before a first build: it verifies prerequisite tools (Node.js, npm,
//! Git), inspects the project for expected artifacts (lockfile,
//! `node_modules`, git metadata), prints system information, and emits
//! remediation suggestions plus a quick-start guide.
//!
//! Every probe is advisory. A failed check produces a recommendation,
//! never a non-zero exit code.
//!
//! # Modules
//!
//! - [`audit`] - Orchestration of the full diagnostic pass
//! - [`checks`] - Individual boolean probes against the host and project
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`guide`] - Static guidance text (quick start, platform notes, links)
//! - [`report`] - Recommendations derived from failed checks
//! - [`sysinfo`] - Host platform and tool version collection
//! - [`ui`] - Theme, status icons, and section rendering
//!
//! # Example
//!
//! ```no_run
//! use preflight::audit::Auditor;
//! use preflight::ui::Theme;
//!
//! let auditor = Auditor::new(std::env::current_dir().unwrap(), Theme::plain());
//! let mut out: Vec<u8> = Vec::new();
//! let results = auditor.run(&mut out).unwrap();
//! println!("all passed: {}", results.all_passed());
//! ```

pub mod audit;
pub mod checks;
pub mod cli;
pub mod error;
pub mod guide;
pub mod report;
pub mod sysinfo;
pub mod ui;

pub use error::{PreflightError, Result};

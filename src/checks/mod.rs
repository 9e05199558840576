//! Boolean probes against the host machine and the project directory.
//!
//! Every probe collapses its failure into `false`: a tool that is
//! absent, present but erroring, or unreadable all report the same
//! negative outcome. No probe ever panics or propagates an error.

mod command;
mod project;
mod results;
mod runtime;

pub use command::{command_succeeds, extract_version, version_output};
pub use project::{has_dependency_dir, has_lockfile, is_git_repo, DEPENDENCY_DIR, LOCKFILE};
pub use results::CheckResults;
pub use runtime::{node_version, parse_major, version_meets_minimum, MIN_NODE_MAJOR};

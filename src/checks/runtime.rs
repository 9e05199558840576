//! Node.js runtime version probe.
//!
//! Gemini CLI requires Node.js 20 or newer. The comparison is a plain
//! integer `>=` on the major component; there is no semver range logic
//! because none is needed for a floor check.

use super::command::version_output;

/// Minimum supported Node.js major version.
pub const MIN_NODE_MAJOR: u32 = 20;

/// Query the installed Node.js version string (e.g., `v22.11.0`).
pub fn node_version() -> Option<String> {
    version_output("node")
}

/// Parse the leading major component of a version string.
///
/// Accepts an optional `v` prefix: `"v18.2.0"` parses to `18`.
/// Returns `None` when no leading number is present.
pub fn parse_major(version: &str) -> Option<u32> {
    let trimmed = version.trim().trim_start_matches('v');
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Whether a version string meets the minimum Node.js major version.
///
/// Unparseable input reports `false`, same as an absent runtime.
pub fn version_meets_minimum(version: &str) -> bool {
    parse_major(version).is_some_and(|major| major >= MIN_NODE_MAJOR)
}

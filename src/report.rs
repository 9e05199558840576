//! Recommendations derived from failed checks.
//!
//! Each failed probe maps to a fixed problem/solution pair, emitted in
//! a fixed priority order: runtime first, then package manager, version
//! control, dependencies, repository. A missing `package-lock.json` is
//! reported during the check phase but intentionally has no entry here,
//! matching the behavior users of the original setup script rely on.

use crate::checks::CheckResults;

/// A problem/solution pair for one failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// Short description of what is wrong.
    pub problem: &'static str,
    /// Actionable fix, usually a single command or download link.
    pub solution: &'static str,
}

/// Build the recommendation list for a result set.
///
/// Returns an empty list when every check passed.
pub fn recommendations(results: &CheckResults) -> Vec<Recommendation> {
    let mut issues = Vec::new();

    if !results.node {
        issues.push(Recommendation {
            problem: "Node.js is not installed or version is too old",
            solution: "Install Node.js 20+ from https://nodejs.org/",
        });
    }

    if !results.npm {
        issues.push(Recommendation {
            problem: "npm is not installed",
            solution: "npm comes with Node.js. Install Node.js from https://nodejs.org/",
        });
    }

    if !results.git {
        issues.push(Recommendation {
            problem: "Git is not installed",
            solution: "Install Git from https://git-scm.com/ (optional but recommended)",
        });
    }

    if !results.node_modules {
        issues.push(Recommendation {
            problem: "Dependencies are not installed",
            solution: "Run: npm install",
        });
    }

    if !results.git_repo {
        issues.push(Recommendation {
            problem: "Not a git repository",
            solution: "Run: git init (if you want version control)",
        });
    }

    issues
}

//! Aggregated check outcomes for one diagnostic run.

/// The outcome of all six probes, fixed set, one boolean each.
///
/// Created fresh per run and discarded at exit; nothing persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResults {
    /// Node.js present and at a supported version.
    pub node: bool,
    /// npm responds to a version query.
    pub npm: bool,
    /// git responds to a version query.
    pub git: bool,
    /// Project root is inside a git working tree.
    pub git_repo: bool,
    /// `package-lock.json` exists at the project root.
    pub package_lock: bool,
    /// `node_modules` exists at the project root.
    pub node_modules: bool,
}

impl CheckResults {
    /// Whether every probe passed.
    pub fn all_passed(&self) -> bool {
        self.node
            && self.npm
            && self.git
            && self.git_repo
            && self.package_lock
            && self.node_modules
    }
}

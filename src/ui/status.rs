//! Unified status vocabulary for check output.
//!
//! `CheckStatus` provides the canonical icons and colors for the three
//! ways a probe line can render: passed, failed prerequisite, and
//! failed project-setup item (advisory).

use super::theme::Theme;

/// Canonical status kinds for a single check line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// The probe passed.
    Pass,
    /// A prerequisite probe failed (blocks building the project).
    Fail,
    /// A project-setup probe failed (fixable with one command).
    Warn,
}

impl CheckStatus {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Fail | Self::Warn => "✗",
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        match self {
            Self::Pass => theme.format_pass(msg),
            Self::Fail => theme.format_fail(msg),
            Self::Warn => theme.format_warn(msg),
        }
    }

    /// Status for a probe outcome, given whether a failure is advisory.
    pub fn from_outcome(passed: bool, advisory: bool) -> Self {
        match (passed, advisory) {
            (true, _) => Self::Pass,
            (false, true) => Self::Warn,
            (false, false) => Self::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_match_outcome() {
        assert_eq!(CheckStatus::Pass.icon(), "✓");
        assert_eq!(CheckStatus::Fail.icon(), "✗");
        assert_eq!(CheckStatus::Warn.icon(), "✗");
    }

    #[test]
    fn from_outcome_maps_pass() {
        assert_eq!(CheckStatus::from_outcome(true, false), CheckStatus::Pass);
        assert_eq!(CheckStatus::from_outcome(true, true), CheckStatus::Pass);
    }

    #[test]
    fn from_outcome_maps_failures_by_advisory_flag() {
        assert_eq!(CheckStatus::from_outcome(false, false), CheckStatus::Fail);
        assert_eq!(CheckStatus::from_outcome(false, true), CheckStatus::Warn);
    }

    #[test]
    fn format_includes_icon_and_message() {
        let theme = Theme::plain();
        for status in [CheckStatus::Pass, CheckStatus::Fail, CheckStatus::Warn] {
            let line = status.format(&theme, "node_modules directory exists");
            assert!(line.contains(status.icon()));
            assert!(line.contains("node_modules"));
        }
    }
}

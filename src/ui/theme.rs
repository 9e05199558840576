//! Visual theme and styling.

use console::Style;

/// Width of the `=` rule drawn above and below section titles.
const SECTION_WIDTH: usize = 60;

/// Preflight's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for non-fatal problems (yellow).
    pub warning: Style,
    /// Style for failing prerequisite checks (red).
    pub error: Style,
    /// Style for instructions and links (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for emphasized text (bold).
    pub highlight: Style,
    /// Style for section titles (cyan bold).
    pub header: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().cyan().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a section banner: a `=` rule, the title, another rule.
    pub fn format_section(&self, title: &str) -> String {
        let rule = "=".repeat(SECTION_WIDTH);
        format!("\n{}\n{}\n{}", rule, self.header.apply_to(title), rule)
    }

    /// Format a passing check line.
    pub fn format_pass(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a failing prerequisite line.
    pub fn format_fail(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a failing project-setup line (advisory, not fatal).
    pub fn format_warn(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

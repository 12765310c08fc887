//! Visual theme and styling.

use console::Style;

/// Width of the rule line printed around the banner.
pub const RULE_WIDTH: usize = 50;

/// The launcher's visual theme.
#[derive(Debug, Clone)]
pub struct LaunchTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational/running elements (magenta).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
}

impl Default for LaunchTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a step announcement.
    pub fn format_step(&self, icon: &str, msg: &str) -> String {
        format!("{} {}", self.info.apply_to(icon), msg)
    }

    /// Format the startup banner.
    pub fn format_header(&self, app_name: &str) -> String {
        format!(
            "{} {}",
            self.info.apply_to("🎓"),
            self.highlight
                .apply_to(format!("Starting {}...", app_name))
        )
    }

    /// Format a contextual hint.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(msg))
    }

    /// Horizontal rule separating the banner from command output.
    pub fn rule(&self) -> String {
        format!("{}", self.dim.apply_to("=".repeat(RULE_WIDTH)))
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = LaunchTheme::plain();
        assert_eq!(theme.format_success("Node.js detected"), "✓ Node.js detected");
    }

    #[test]
    fn theme_formats_error() {
        let theme = LaunchTheme::plain();
        assert_eq!(theme.format_error("Error: boom"), "✗ Error: boom");
    }

    #[test]
    fn theme_formats_header() {
        let theme = LaunchTheme::plain();
        assert_eq!(theme.format_header("my-app"), "🎓 Starting my-app...");
    }

    #[test]
    fn rule_is_fifty_wide() {
        let theme = LaunchTheme::plain();
        assert_eq!(theme.rule(), "=".repeat(50));
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = LaunchTheme::new();
        assert!(theme.format_warning("careful").contains("careful"));
    }
}

//! Visual theme and styling.

use console::Style;

/// dev-start's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
    /// Style for remediation commands (bold).
    pub command: Style,
    /// Style for command labels (dim).
    pub label: Style,
    /// Style for headers (magenta bold).
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
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            hint: Style::new().magenta().dim(),
            command: Style::new().bold(),
            label: Style::new().dim(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            hint: Style::new(),
            command: Style::new(),
            label: Style::new(),
            header: Style::new(),
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

    /// Format a prose suggestion.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {}", self.hint.apply_to(format!("💡 {}", hint)))
    }

    /// Format a remediation command, optionally behind a short label.
    pub fn format_command(&self, label: Option<&str>, command: &str) -> String {
        match label {
            Some(label) => format!(
                "  {} {}",
                self.label.apply_to(format!("{}:", label)),
                self.command.apply_to(command)
            ),
            None => format!("    {}", self.command.apply_to(command)),
        }
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("▸ {}", title)))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = Theme::plain();
        assert_eq!(theme.format_success("Working tree clean"), "✓ Working tree clean");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = Theme::plain();
        assert_eq!(theme.format_warning("Uncommitted changes"), "⚠ Uncommitted changes");
    }

    #[test]
    fn theme_formats_error() {
        let theme = Theme::plain();
        assert_eq!(theme.format_error("Not a git repository"), "✗ Not a git repository");
    }

    #[test]
    fn theme_formats_hint() {
        let theme = Theme::plain();
        assert_eq!(theme.format_hint("Pull first."), "  💡 Pull first.");
    }

    #[test]
    fn theme_formats_labelled_command() {
        let theme = Theme::plain();
        assert_eq!(
            theme.format_command(Some("Create"), "python3 -m venv venv"),
            "  Create: python3 -m venv venv"
        );
    }

    #[test]
    fn theme_formats_bare_command() {
        let theme = Theme::plain();
        assert_eq!(theme.format_command(None, "git pull"), "    git pull");
    }

    #[test]
    fn theme_formats_header() {
        let theme = Theme::plain();
        assert_eq!(theme.format_header("Quick start:"), "▸ Quick start:");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = Theme::new();
        assert!(theme.format_success("done").contains("done"));
    }
}

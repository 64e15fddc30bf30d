//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output,
//! both per kind and as an ordered transcript rendered with the plain theme.
//! The transcript is exactly what [`TerminalUI`](super::TerminalUI) prints
//! without colors.
//!
//! # Example
//!
//! ```
//! use dev_start::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Changed files:");
//! ui.success("Working tree clean");
//!
//! assert!(ui.has_message("Changed files"));
//! assert!(ui.successes().contains(&"Working tree clean".to_string()));
//! assert_eq!(ui.lines()[1], "✓ Working tree clean");
//! ```

use super::{Theme, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    theme: Theme,
    lines: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    commands: Vec<(Option<String>, String)>,
    headers: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self {
            theme: Theme::plain(),
            lines: Vec::new(),
            messages: Vec::new(),
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            hints: Vec::new(),
            commands: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Every rendered line, in output order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full transcript, one line per output line.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured commands as (label, command).
    pub fn commands(&self) -> &[(Option<String>, String)] {
        &self.commands
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Check if a command containing `command` was shown.
    pub fn has_command(&self, command: &str) -> bool {
        self.commands.iter().any(|(_, c)| c.contains(command))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.hints.clear();
        self.commands.clear();
        self.headers.clear();
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.lines.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.lines.push(self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.lines.push(self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.lines.push(self.theme.format_error(msg));
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
        self.lines.push(self.theme.format_hint(hint));
    }

    fn show_command(&mut self, label: Option<&str>, command: &str) {
        self.commands
            .push((label.map(str::to_string), command.to_string()));
        self.lines.push(self.theme.format_command(label, command));
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.lines.push(self.theme.format_header(title));
    }
}

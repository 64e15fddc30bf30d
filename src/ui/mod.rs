//! Report output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing styled lines to stdout
//! - [`MockUI`] capturing lines for tests
//!
//! # Example
//!
//! ```
//! use dev_start::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("No virtual environment found");
//! ui.show_command(Some("Create"), "python3 -m venv venv");
//!
//! assert_eq!(
//!     ui.lines(),
//!     ["⚠ No virtual environment found", "  Create: python3 -m venv venv"]
//! );
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for report output.
///
/// Every method writes exactly one line. Verbosity decisions belong to the
/// caller, so implementations never filter.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a prose suggestion.
    fn show_hint(&mut self, hint: &str);

    /// Display a remediation command, optionally behind a short label.
    fn show_command(&mut self, label: Option<&str>, command: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}

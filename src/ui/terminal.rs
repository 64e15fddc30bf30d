//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, Theme, UserInterface};

/// Terminal UI implementation.
///
/// All lines, errors included, go to stdout.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI, colored when `colors` is set.
    pub fn new(colors: bool) -> Self {
        let theme = if colors { Theme::new() } else { Theme::plain() };

        Self {
            term: Term::stdout(),
            theme,
        }
    }

    fn line(&mut self, line: &str) {
        writeln!(self.term, "{}", line).ok();
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.line(&line);
    }

    fn warning(&mut self, msg: &str) {
        let line = self.theme.format_warning(msg);
        self.line(&line);
    }

    fn error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.line(&line);
    }

    fn show_hint(&mut self, hint: &str) {
        let line = self.theme.format_hint(hint);
        self.line(&line);
    }

    fn show_command(&mut self, label: Option<&str>, command: &str) {
        let line = self.theme.format_command(label, command);
        self.line(&line);
    }

    fn show_header(&mut self, title: &str) {
        let line = self.theme.format_header(title);
        self.line(&line);
    }
}

/// Create the UI for a run.
///
/// Colors are used only when stdout is a TTY, `NO_COLOR` is unset and
/// `no_color` is false.
pub fn create_ui(no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(!no_color && should_use_colors()))
}

//! Quick-start summary.

use crate::context::ReportContext;
use crate::detection::{detect_project_markers, Marker};
use crate::ui::UserInterface;

/// Header above the quick-start commands.
pub const HEADER: &str = "Quick start:";

/// Start commands keyed on their marker, in print order.
const START_COMMANDS: [(Marker, &str, &str); 3] = [
    (Marker::ManagePy, "Django", "python manage.py runserver"),
    (Marker::PackageJson, "Node.js", "npm run dev"),
    (Marker::RequirementsTxt, "Python", "pip install -r requirements.txt"),
];

/// Print start commands for the detected project types.
///
/// Verbose mode always prints the header and two closing commands. Terse
/// mode prints the header only before the first matching command, so a
/// project without markers gets no summary at all.
pub fn check(ctx: &ReportContext, ui: &mut dyn UserInterface) {
    let markers = detect_project_markers(ctx.project_root());
    let verbose = ctx.is_verbose();

    if verbose {
        ui.show_header(HEADER);
    }

    let mut header_shown = verbose;
    for (marker, label, command) in START_COMMANDS {
        if !markers.has(marker) {
            continue;
        }
        if !header_shown {
            ui.show_header(HEADER);
            header_shown = true;
        }
        ui.show_command(Some(label), command);
    }

    if verbose {
        ui.show_command(Some("Check status"), "git status");
        ui.show_command(Some("Leave venv"), "deactivate");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn run(mode: OutputMode, files: &[&str]) -> MockUI {
        let temp = TempDir::new().unwrap();
        for file in files {
            fs::write(temp.path().join(file), "").unwrap();
        }
        let ctx = ReportContext::new(temp.path(), mode);
        let mut ui = MockUI::new();
        check(&ctx, &mut ui);
        ui
    }

    #[test]
    fn terse_without_markers_prints_nothing() {
        let ui = run(OutputMode::Normal, &["pyproject.toml", "Dockerfile"]);

        assert!(ui.lines().is_empty());
    }

    #[test]
    fn terse_prints_header_once() {
        let ui = run(OutputMode::Normal, &["requirements.txt", "manage.py"]);

        assert_eq!(
            ui.lines(),
            [
                "▸ Quick start:",
                "  Django: python manage.py runserver",
                "  Python: pip install -r requirements.txt",
            ]
        );
    }

    #[test]
    fn terse_all_three() {
        let ui = run(
            OutputMode::Normal,
            &["manage.py", "package.json", "requirements.txt"],
        );

        assert_eq!(ui.headers().len(), 1);
        assert_eq!(ui.commands().len(), 3);
        assert!(ui.has_command("npm run dev"));
    }

    #[test]
    fn verbose_without_markers_keeps_frame() {
        let ui = run(OutputMode::Verbose, &[]);

        assert_eq!(
            ui.lines(),
            [
                "▸ Quick start:",
                "  Check status: git status",
                "  Leave venv: deactivate",
            ]
        );
    }

    #[test]
    fn verbose_with_node() {
        let ui = run(OutputMode::Verbose, &["package.json"]);

        assert_eq!(
            ui.lines(),
            [
                "▸ Quick start:",
                "  Node.js: npm run dev",
                "  Check status: git status",
                "  Leave venv: deactivate",
            ]
        );
    }
}

//! Project type report.

use crate::context::ReportContext;
use crate::detection::detect_project_markers;
use crate::ui::UserInterface;

/// List detected project types (verbose only).
pub fn check(ctx: &ReportContext, ui: &mut dyn UserInterface) {
    if !ctx.is_verbose() {
        return;
    }

    let labels = detect_project_markers(ctx.project_root()).project_labels();
    if labels.is_empty() {
        ui.message("Generic project (no framework markers found)");
    } else {
        ui.message(&format!("Detected: {}", labels.join(", ")));
    }
}

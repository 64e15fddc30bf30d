//! Directory structure report.

use crate::context::ReportContext;
use crate::detection::{inspect_layout, LayoutReport};
use crate::ui::UserInterface;

use super::hints;

/// Report present and missing project directories.
pub fn check(ctx: &ReportContext, ui: &mut dyn UserInterface) {
    let layout = inspect_layout(ctx.project_root());
    report(ctx, &layout, ui);
}

/// Render an already computed layout.
pub fn report(ctx: &ReportContext, layout: &LayoutReport, ui: &mut dyn UserInterface) {
    if ctx.is_verbose() {
        for dir in &layout.present {
            ui.success(&format!("{}/", dir));
        }
        for dir in &layout.optional_present {
            ui.success(&format!("{}/ (optional)", dir));
        }
    }

    if layout.missing.is_empty() {
        return;
    }

    let command = hints::create_dirs(&layout.missing);
    if ctx.is_verbose() {
        ui.warning(&format!("Missing directories: {}", layout.missing.join(" ")));
        ui.show_hint(hints::create_dirs_first());
        ui.show_command(None, &command);
    } else {
        ui.show_command(Some("Create dirs"), &command);
    }
}

//! Virtual-environment discovery report.

use crate::context::ReportContext;
use crate::detection::{discover_venvs, VenvDiscovery};
use crate::ui::UserInterface;

use super::hints;

/// Report whether the project has exactly one virtual environment.
pub fn check(ctx: &ReportContext, ui: &mut dyn UserInterface) {
    let discovery = discover_venvs(ctx.project_root());
    tracing::debug!("Virtual environments: {:?}", discovery);
    report(ctx, &discovery, ui);
}

/// Render an already computed discovery.
pub fn report(ctx: &ReportContext, discovery: &VenvDiscovery, ui: &mut dyn UserInterface) {
    let verbose = ctx.is_verbose();

    match discovery {
        VenvDiscovery::Single(dir) => {
            ui.success(&format!("Virtual environment found: {}", dir));
            match ctx.active_venv() {
                None if verbose => {
                    ui.show_hint(hints::activate_first());
                    ui.show_command(None, &hints::activate_venv(dir));
                }
                None => ui.show_command(Some("Activate"), &hints::activate_venv(dir)),
                Some(active) if verbose => ui.success(&format!("Active: {}", active)),
                Some(_) => {}
            }
        }
        VenvDiscovery::None => {
            ui.warning("No virtual environment found");
            if verbose {
                ui.show_hint(hints::create_venv_first());
                ui.show_command(None, hints::CREATE_VENV);
            } else {
                ui.show_command(Some("Create"), hints::CREATE_VENV);
            }
        }
        VenvDiscovery::Multiple(dirs) => {
            ui.warning("Multiple virtual environments found");
            // Terse mode prints the warning only.
            if verbose {
                for dir in dirs {
                    ui.message(&format!("  - {}", dir));
                }
                ui.show_hint(hints::keep_one_venv());
            }
        }
    }
}

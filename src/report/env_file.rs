//! Environment file report.

use crate::context::ReportContext;
use crate::detection::file_detection::file_exists;
use crate::ui::UserInterface;

/// Name of the environment file at the project root.
pub const ENV_FILE: &str = ".env";

/// Note whether `.env` exists (verbose only).
pub fn check(ctx: &ReportContext, ui: &mut dyn UserInterface) {
    if !ctx.is_verbose() {
        return;
    }

    if file_exists(ctx.project_root(), ENV_FILE) {
        ui.success(".env file found");
    } else {
        ui.message("No .env file (optional)");
    }
}

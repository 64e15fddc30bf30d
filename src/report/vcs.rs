//! Version-control status: local changes and distance from the remote.

use crate::context::ReportContext;
use crate::probe::RepositoryStatusProvider;
use crate::ui::UserInterface;

use super::hints;

/// Report uncommitted changes, or how far the branch is behind its remote.
///
/// Every query is best-effort. A failed status skips the section, a failed
/// fetch ends it quietly and a failed comparison counts as zero commits
/// behind.
pub fn check(ctx: &ReportContext, repo: &dyn RepositoryStatusProvider, ui: &mut dyn UserInterface) {
    let changes = match repo.porcelain_status() {
        Ok(changes) => changes,
        Err(e) => {
            tracing::debug!("Status unavailable, skipping version-control check: {}", e);
            return;
        }
    };

    if !changes.is_empty() {
        ui.warning("Uncommitted changes");
        if ctx.is_verbose() {
            ui.message("Changed files:");
            match repo.short_status() {
                Ok(lines) => {
                    for line in lines {
                        ui.message(&format!("  {}", line));
                    }
                }
                Err(e) => tracing::debug!("Short status unavailable: {}", e),
            }
            ui.show_hint(hints::commit_or_stash());
        } else {
            for line in hints::COMMIT_AND_PUSH {
                ui.show_command(None, line);
            }
        }
        return;
    }

    if ctx.is_verbose() {
        ui.success("Working tree clean");
    }

    let Some(branch) = repo.current_branch() else {
        tracing::debug!("Detached HEAD, skipping remote comparison");
        return;
    };

    if !repo.fetch() {
        tracing::debug!("Fetch unavailable, skipping remote comparison");
        return;
    }

    let behind = repo.commits_behind(&branch).unwrap_or(0);
    tracing::debug!("{} is {} commit(s) behind origin", branch, behind);

    if behind > 0 {
        let noun = if behind == 1 { "commit" } else { "commits" };
        ui.warning(&format!(
            "Branch {} is {} {} behind origin/{}",
            branch, behind, noun, branch
        ));
        if ctx.is_verbose() {
            ui.show_hint(&hints::pull_latest(&branch));
        } else {
            ui.show_command(None, hints::PULL);
        }
    } else if ctx.is_verbose() {
        ui.success(&format!("Up to date with origin/{}", branch));
    }
}

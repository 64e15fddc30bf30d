//! The environment report.
//!
//! [`Reporter::run`] executes every check in a fixed order:
//!
//! 1. [`repository`] - precondition, aborts the run outside a working tree
//! 2. [`vcs`] - uncommitted changes and commits behind the remote
//! 3. [`venv`] - virtual-environment discovery
//! 4. [`structure`] - standard and optional directories
//! 5. [`project_type`] - detected project types (verbose only)
//! 6. [`ports`] - busy development ports
//! 7. [`env_file`] - `.env` presence (verbose only)
//! 8. [`summary`] - quick-start commands
//!
//! Checks only read. Each one recomputes what it needs from the project
//! root, so no check depends on another's output.

pub mod env_file;
pub mod hints;
pub mod ports;
pub mod project_type;
pub mod repository;
pub mod structure;
pub mod summary;
pub mod vcs;
pub mod venv;

use crate::context::ReportContext;
use crate::error::Result;
use crate::probe::{PortProbe, RepositoryStatusProvider};
use crate::ui::UserInterface;

/// Runs the full report against a project.
pub struct Reporter<'a> {
    ctx: &'a ReportContext,
    repo: &'a dyn RepositoryStatusProvider,
    ports: &'a dyn PortProbe,
}

impl<'a> Reporter<'a> {
    /// Create a reporter using the given collaborators.
    pub fn new(
        ctx: &'a ReportContext,
        repo: &'a dyn RepositoryStatusProvider,
        ports: &'a dyn PortProbe,
    ) -> Self {
        Self { ctx, repo, ports }
    }

    /// Run every check.
    ///
    /// Returns [`DevStartError::NotARepository`](crate::error::DevStartError)
    /// before printing anything when the precondition fails.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        repository::require_work_tree(self.ctx, self.repo)?;

        let verbose = self.ctx.is_verbose();
        if verbose {
            ui.show_header(&format!(
                "Development environment check ({})",
                self.ctx.started_at().format("%Y-%m-%d %H:%M:%S")
            ));
        }

        repository::check(self.ctx, ui);
        vcs::check(self.ctx, self.repo, ui);
        venv::check(self.ctx, ui);
        structure::check(self.ctx, ui);
        project_type::check(self.ctx, ui);
        ports::check(self.ctx, self.ports, ui);
        env_file::check(self.ctx, ui);
        summary::check(self.ctx, ui);

        if verbose {
            ui.success("Environment check complete");
        }

        tracing::debug!("Report finished for {}", self.ctx.project_root().display());
        Ok(())
    }
}

//! Report command implementation.
//!
//! `dev-start` runs the environment report against the project root.

use std::path::Path;
use std::time::Duration;

use crate::cli::args::Cli;
use crate::context::ReportContext;
use crate::error::{DevStartError, Result};
use crate::probe::{GitCli, LsofProbe, PortProbe, RepositoryStatusProvider};
use crate::report::Reporter;
use crate::ui::{OutputMode, UserInterface};

use super::{Command, CommandResult};

/// Exit code for a run outside a working tree.
pub const NOT_A_REPOSITORY_EXIT: i32 = 1;

/// The report command implementation.
pub struct ReportCommand {
    ctx: ReportContext,
}

impl ReportCommand {
    /// Create a report command for an already resolved context.
    pub fn new(ctx: ReportContext) -> Self {
        Self { ctx }
    }

    /// Resolve the context from parsed arguments and the process environment.
    pub fn from_cli(cli: &Cli, project_root: &Path) -> Self {
        let ctx = ReportContext::from_env(project_root, OutputMode::from_verbose(cli.verbose))
            .with_fetch_timeout(Duration::from_secs(cli.fetch_timeout))
            .with_fetch_enabled(!cli.no_fetch);
        Self::new(ctx)
    }

    /// Get the resolved context.
    pub fn context(&self) -> &ReportContext {
        &self.ctx
    }

    /// Run the report with explicit collaborators.
    pub fn execute_with(
        &self,
        repo: &dyn RepositoryStatusProvider,
        ports: &dyn PortProbe,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match Reporter::new(&self.ctx, repo, ports).run(ui) {
            Ok(()) => Ok(CommandResult::success()),
            Err(DevStartError::NotARepository { path }) => {
                tracing::debug!("{} is not inside a working tree", path.display());
                ui.error("Not a git repository");
                Ok(CommandResult::failure(NOT_A_REPOSITORY_EXIT))
            }
            Err(e) => Err(e),
        }
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut git =
            GitCli::new(self.ctx.project_root()).with_fetch_timeout(self.ctx.fetch_timeout());
        if !self.ctx.fetch_enabled() {
            git = git.without_fetch();
        }

        self.execute_with(&git, &LsofProbe, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{FakePortProbe, FakeRepository};
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn from_cli_resolves_context() {
        let cli = Cli::try_parse_from(["dev-start", "--verbose", "--no-fetch", "--fetch-timeout", "2"])
            .unwrap();

        let cmd = ReportCommand::from_cli(&cli, Path::new("/work/shop"));

        assert!(cmd.context().is_verbose());
        assert!(!cmd.context().fetch_enabled());
        assert_eq!(cmd.context().fetch_timeout(), Duration::from_secs(2));
        assert_eq!(cmd.context().project_root(), Path::new("/work/shop"));
    }

    #[test]
    fn not_a_repository_prints_only_the_error() {
        let temp = TempDir::new().unwrap();
        let cmd = ReportCommand::new(ReportContext::new(temp.path(), OutputMode::Verbose));
        let mut ui = MockUI::new();

        let result = cmd
            .execute_with(&FakeRepository::outside(), &FakePortProbe::new(), &mut ui)
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, NOT_A_REPOSITORY_EXIT);
        assert_eq!(ui.lines(), ["✗ Not a git repository"]);
    }

    #[test]
    fn report_succeeds_inside_repository() {
        let temp = TempDir::new().unwrap();
        let cmd = ReportCommand::new(ReportContext::new(temp.path(), OutputMode::Normal));
        let mut ui = MockUI::new();

        let result = cmd
            .execute_with(&FakeRepository::clean(), &FakePortProbe::new(), &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_warning("No virtual environment found"));
    }

    #[test]
    fn failed_status_does_not_change_exit_code() {
        let temp = TempDir::new().unwrap();
        let cmd = ReportCommand::new(ReportContext::new(temp.path(), OutputMode::Normal));
        let repo = FakeRepository::clean().with_failing_status();
        let mut ui = MockUI::new();

        let result = cmd
            .execute_with(&repo, &FakePortProbe::new(), &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.errors().is_empty());
        assert!(ui.has_warning("No virtual environment found"));
    }

    #[test]
    fn real_command_outside_repository_fails() {
        let temp = TempDir::new().unwrap();
        let cmd = ReportCommand::new(ReportContext::new(temp.path(), OutputMode::Normal));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, NOT_A_REPOSITORY_EXIT);
        assert!(ui.has_error("Not a git repository"));
    }
}

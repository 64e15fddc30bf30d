//! Repository precondition.

use crate::context::ReportContext;
use crate::error::{DevStartError, Result};
use crate::probe::RepositoryStatusProvider;
use crate::ui::UserInterface;

/// Fail unless the project root is inside a working tree.
///
/// Prints nothing; the caller reports [`DevStartError::NotARepository`].
pub fn require_work_tree(
    ctx: &ReportContext,
    repo: &dyn RepositoryStatusProvider,
) -> Result<()> {
    if repo.is_inside_work_tree() {
        Ok(())
    } else {
        Err(DevStartError::NotARepository {
            path: ctx.project_root().to_path_buf(),
        })
    }
}

/// Confirm the repository in verbose mode.
pub fn check(ctx: &ReportContext, ui: &mut dyn UserInterface) {
    if ctx.is_verbose() {
        ui.success(&format!("Git repository: {}", ctx.project_name()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::FakeRepository;
    use crate::ui::{MockUI, OutputMode};
    use std::path::Path;

    #[test]
    fn outside_work_tree_is_an_error() {
        let ctx = ReportContext::new(Path::new("/scratch"), OutputMode::Normal);

        let err = require_work_tree(&ctx, &FakeRepository::outside()).unwrap_err();

        assert!(matches!(err, DevStartError::NotARepository { path } if path == Path::new("/scratch")));
    }

    #[test]
    fn inside_work_tree_passes() {
        let ctx = ReportContext::new(Path::new("/work/shop"), OutputMode::Normal);

        assert!(require_work_tree(&ctx, &FakeRepository::clean()).is_ok());
    }

    #[test]
    fn verbose_names_the_project() {
        let ctx = ReportContext::new(Path::new("/work/shop"), OutputMode::Verbose);
        let mut ui = MockUI::new();

        check(&ctx, &mut ui);

        assert_eq!(ui.lines(), ["✓ Git repository: shop"]);
    }

    #[test]
    fn terse_is_silent() {
        let ctx = ReportContext::new(Path::new("/work/shop"), OutputMode::Normal);
        let mut ui = MockUI::new();

        check(&ctx, &mut ui);

        assert!(ui.lines().is_empty());
    }
}

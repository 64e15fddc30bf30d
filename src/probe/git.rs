//! Git repository queries.
//!
//! [`GitCli`] shells out to the `git` binary. Only the remote fetch touches
//! the network, so it is the only call bounded by a timeout.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DevStartError, Result};
use crate::shell::{execute, CommandOptions, CommandResult};

/// Default bound on `git fetch`.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Version-control state of a project.
pub trait RepositoryStatusProvider {
    /// Whether the project root is inside a working tree.
    fn is_inside_work_tree(&self) -> bool;

    /// Porcelain status lines; empty means the tree is clean.
    fn porcelain_status(&self) -> Result<Vec<String>>;

    /// Short status lines, used to list changed paths.
    fn short_status(&self) -> Result<Vec<String>>;

    /// The current branch, or `None` for a detached HEAD.
    fn current_branch(&self) -> Option<String>;

    /// Fetch from the remote. Returns whether the fetch succeeded.
    fn fetch(&self) -> bool;

    /// Commits the local branch is behind `origin/<branch>`, or `None` when
    /// the comparison is unavailable.
    fn commits_behind(&self, branch: &str) -> Option<u32>;
}

/// [`RepositoryStatusProvider`] backed by the `git` command line.
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
    fetch_timeout: Duration,
    fetch_enabled: bool,
}

impl GitCli {
    /// Create a provider for the repository containing `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            fetch_enabled: true,
        }
    }

    /// Set the fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Never contact the remote; every fetch reports failure.
    pub fn without_fetch(mut self) -> Self {
        self.fetch_enabled = false;
        self
    }

    fn git(&self, args: &[&str], options: CommandOptions) -> Result<CommandResult> {
        execute("git", args, &options)
    }

    fn git_lines(&self, args: &[&str]) -> Result<Vec<String>> {
        let result = self.git(args, CommandOptions::in_dir(&self.root))?;
        if !result.success {
            return Err(DevStartError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                code: result.exit_code,
            });
        }
        Ok(result.stdout_lines())
    }
}

impl RepositoryStatusProvider for GitCli {
    fn is_inside_work_tree(&self) -> bool {
        match self.git(
            &["rev-parse", "--is-inside-work-tree"],
            CommandOptions::in_dir(&self.root),
        ) {
            Ok(result) => result.success && result.stdout.trim() == "true",
            Err(e) => {
                tracing::debug!("git unavailable: {}", e);
                false
            }
        }
    }

    fn porcelain_status(&self) -> Result<Vec<String>> {
        self.git_lines(&["status", "--porcelain"])
    }

    fn short_status(&self) -> Result<Vec<String>> {
        self.git_lines(&["status", "--short"])
    }

    fn current_branch(&self) -> Option<String> {
        let lines = self.git_lines(&["branch", "--show-current"]).ok()?;
        lines.into_iter().next().map(|b| b.trim().to_string())
    }

    fn fetch(&self) -> bool {
        if !self.fetch_enabled {
            tracing::debug!("Remote fetch disabled");
            return false;
        }

        let options = CommandOptions::in_dir(&self.root)
            .with_timeout(self.fetch_timeout)
            .with_env("GIT_TERMINAL_PROMPT", "0");

        match self.git(&["fetch", "--quiet"], options) {
            Ok(result) if result.success => true,
            Ok(result) => {
                tracing::debug!(
                    "git fetch unavailable after {:?} (exit {:?}, timed out: {}): {}",
                    result.duration,
                    result.exit_code,
                    result.timed_out,
                    result.stderr.trim()
                );
                false
            }
            Err(e) => {
                tracing::debug!("git fetch failed to start: {}", e);
                false
            }
        }
    }

    fn commits_behind(&self, branch: &str) -> Option<u32> {
        let range = format!("HEAD..origin/{}", branch);
        let lines = self.git_lines(&["rev-list", "--count", &range]).ok()?;
        lines.first().and_then(|count| count.trim().parse().ok())
    }
}

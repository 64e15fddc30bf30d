//! Per-run configuration.
//!
//! A [`ReportContext`] is resolved once from the command line and the
//! process environment, then passed by reference to every check.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::probe::DEFAULT_FETCH_TIMEOUT;
use crate::ui::OutputMode;

/// Environment variable naming the active virtual environment.
pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

/// Immutable settings shared by all checks in a run.
#[derive(Debug, Clone)]
pub struct ReportContext {
    project_root: PathBuf,
    mode: OutputMode,
    active_venv: Option<String>,
    started_at: DateTime<Local>,
    fetch_timeout: Duration,
    fetch_enabled: bool,
}

impl ReportContext {
    /// Create a context for `project_root` with nothing active, started now.
    pub fn new(project_root: &Path, mode: OutputMode) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            mode,
            active_venv: None,
            started_at: Local::now(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            fetch_enabled: true,
        }
    }

    /// Create a context reading the active virtual environment from the
    /// process environment.
    pub fn from_env(project_root: &Path, mode: OutputMode) -> Self {
        Self::new(project_root, mode).with_active_venv(std::env::var(VIRTUAL_ENV_VAR).ok())
    }

    /// Set the active virtual environment. An empty value means none.
    pub fn with_active_venv(mut self, venv: Option<String>) -> Self {
        self.active_venv = venv.filter(|v| !v.is_empty());
        self
    }

    /// Set the run's start time.
    pub fn with_started_at(mut self, started_at: DateTime<Local>) -> Self {
        self.started_at = started_at;
        self
    }

    /// Set the remote fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Enable or disable the remote fetch.
    pub fn with_fetch_enabled(mut self, enabled: bool) -> Self {
        self.fetch_enabled = enabled;
        self
    }

    /// The project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Whether verbose output is enabled.
    pub fn is_verbose(&self) -> bool {
        self.mode.is_verbose()
    }

    /// Path of the active virtual environment.
    pub fn active_venv(&self) -> Option<&str> {
        self.active_venv.as_deref()
    }

    /// When the run started.
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Bound on the remote fetch.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Whether the remote fetch may run.
    pub fn fetch_enabled(&self) -> bool {
        self.fetch_enabled
    }

    /// Base name of the project root, for display.
    pub fn project_name(&self) -> String {
        self.project_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.project_root.display().to_string())
    }
}

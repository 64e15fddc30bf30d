//! In-memory probes for testing.
//!
//! Both fakes record the queries made against them so tests can assert
//! which checks ran.
//!
//! # Example
//!
//! ```
//! use dev_start::probe::{FakePortProbe, FakeRepository, PortProbe, RepositoryStatusProvider};
//!
//! let repo = FakeRepository::clean().with_behind(2);
//! assert!(repo.fetch());
//! assert_eq!(repo.commits_behind("main"), Some(2));
//!
//! let ports = FakePortProbe::new().with_listener(3000, "node");
//! assert_eq!(ports.listener(3000), Some("node".to_string()));
//! assert_eq!(ports.probed(), vec![3000]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{DevStartError, Result};

use super::{PortProbe, RepositoryStatusProvider};

/// Scripted [`RepositoryStatusProvider`].
#[derive(Debug, Default)]
pub struct FakeRepository {
    inside_work_tree: bool,
    porcelain: Vec<String>,
    short: Vec<String>,
    branch: Option<String>,
    fetch_succeeds: bool,
    status_fails: bool,
    behind: Option<u32>,
    calls: RefCell<Vec<&'static str>>,
}

impl FakeRepository {
    /// A clean, up-to-date repository on `main`.
    pub fn clean() -> Self {
        Self {
            inside_work_tree: true,
            branch: Some("main".to_string()),
            fetch_succeeds: true,
            behind: Some(0),
            ..Default::default()
        }
    }

    /// A directory outside any working tree.
    pub fn outside() -> Self {
        Self::default()
    }

    /// Uncommitted changes, given as status lines.
    pub fn with_changes(mut self, lines: &[&str]) -> Self {
        self.porcelain = lines.iter().map(|l| l.to_string()).collect();
        self.short = self.porcelain.clone();
        self
    }

    /// Set the current branch (`None` for detached HEAD).
    pub fn with_branch(mut self, branch: Option<&str>) -> Self {
        self.branch = branch.map(str::to_string);
        self
    }

    /// Number of commits behind the remote.
    pub fn with_behind(mut self, behind: u32) -> Self {
        self.behind = Some(behind);
        self
    }

    /// Make the remote comparison unavailable.
    pub fn without_remote_branch(mut self) -> Self {
        self.behind = None;
        self
    }

    /// Make `fetch` fail.
    pub fn with_failing_fetch(mut self) -> Self {
        self.fetch_succeeds = false;
        self
    }

    /// Make both status queries fail as if `git status` exited 128.
    pub fn with_failing_status(mut self) -> Self {
        self.status_fails = true;
        self
    }

    /// Queries made so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }

    fn status(&self, flag: &str, lines: &[String]) -> Result<Vec<String>> {
        if self.status_fails {
            return Err(DevStartError::CommandFailed {
                command: format!("git status {}", flag),
                code: Some(128),
            });
        }
        Ok(lines.to_vec())
    }
}

impl RepositoryStatusProvider for FakeRepository {
    fn is_inside_work_tree(&self) -> bool {
        self.record("is_inside_work_tree");
        self.inside_work_tree
    }

    fn porcelain_status(&self) -> Result<Vec<String>> {
        self.record("porcelain_status");
        self.status("--porcelain", &self.porcelain)
    }

    fn short_status(&self) -> Result<Vec<String>> {
        self.record("short_status");
        self.status("--short", &self.short)
    }

    fn current_branch(&self) -> Option<String> {
        self.record("current_branch");
        self.branch.clone()
    }

    fn fetch(&self) -> bool {
        self.record("fetch");
        self.fetch_succeeds
    }

    fn commits_behind(&self, _branch: &str) -> Option<u32> {
        self.record("commits_behind");
        self.behind
    }
}

/// Scripted [`PortProbe`].
#[derive(Debug, Default)]
pub struct FakePortProbe {
    listeners: HashMap<u16, String>,
    probed: RefCell<Vec<u16>>,
}

impl FakePortProbe {
    /// A probe with nothing listening.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `port` as held by `process`.
    pub fn with_listener(mut self, port: u16, process: &str) -> Self {
        self.listeners.insert(port, process.to_string());
        self
    }

    /// Ports queried so far, in order.
    pub fn probed(&self) -> Vec<u16> {
        self.probed.borrow().clone()
    }
}

impl PortProbe for FakePortProbe {
    fn listener(&self, port: u16) -> Option<String> {
        self.probed.borrow_mut().push(port);
        self.listeners.get(&port).cloned()
    }
}

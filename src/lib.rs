//! dev-start - Read-only development environment report.
//!
//! `dev-start` inspects the project it is run in and prints a short status
//! report: uncommitted changes, commits behind the remote, virtual
//! environments, directory layout, busy development ports and quick-start
//! commands. It never changes anything; every remedy is printed for the
//! user to run.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`context`] - Immutable per-run report context
//! - [`detection`] - Project marker, layout and virtual-environment detection
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Version-control and port capabilities
//! - [`report`] - The ordered environment checks
//! - [`shell`] - External command execution
//! - [`ui`] - Themed terminal output
//!
//! # Example
//!
//! ```
//! use dev_start::context::ReportContext;
//! use dev_start::probe::{FakePortProbe, FakeRepository};
//! use dev_start::report::Reporter;
//! use dev_start::ui::{MockUI, OutputMode};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let ctx = ReportContext::new(dir.path(), OutputMode::Normal);
//! let repo = FakeRepository::clean();
//! let ports = FakePortProbe::new();
//! let mut ui = MockUI::new();
//!
//! Reporter::new(&ctx, &repo, &ports).run(&mut ui).unwrap();
//! assert!(ui.has_warning("No virtual environment found"));
//! ```

pub mod cli;
pub mod context;
pub mod detection;
pub mod error;
pub mod probe;
pub mod report;
pub mod shell;
pub mod ui;

pub use error::{DevStartError, Result};

//! Read-only queries against external tools.
//!
//! Each collaborator sits behind a narrow trait so reports can be tested
//! without a real repository or real listening sockets:
//!
//! - [`RepositoryStatusProvider`] - version-control state ([`GitCli`])
//! - [`PortProbe`] - listening-process lookup ([`LsofProbe`])
//!
//! [`fake`] holds in-memory implementations of both.

pub mod fake;
pub mod git;
pub mod ports;

pub use fake::{FakePortProbe, FakeRepository};
pub use git::{GitCli, RepositoryStatusProvider, DEFAULT_FETCH_TIMEOUT};
pub use ports::{parse_lsof_command, LsofProbe, PortProbe};

//! External command execution.

pub mod command;

pub use command::{execute, execute_check, CommandOptions, CommandResult};

//! Listening-port queries.

use crate::shell::{execute, CommandOptions};

/// Looks up the process listening on a TCP port.
pub trait PortProbe {
    /// The command name of the process listening on `port`, if any.
    fn listener(&self, port: u16) -> Option<String>;
}

/// [`PortProbe`] backed by `lsof`.
///
/// A missing `lsof` binary reads as "nothing listening".
#[derive(Debug, Clone, Copy, Default)]
pub struct LsofProbe;

impl PortProbe for LsofProbe {
    fn listener(&self, port: u16) -> Option<String> {
        let filter = format!("-iTCP:{}", port);
        let result = match execute(
            "lsof",
            &["-nP", &filter, "-sTCP:LISTEN", "-Fc"],
            &CommandOptions::default(),
        ) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("Port probe unavailable: {}", e);
                return None;
            }
        };

        // lsof exits non-zero when nothing matches the filter.
        if !result.success {
            return None;
        }

        Some(parse_lsof_command(&result.stdout).unwrap_or_else(|| "unknown".to_string()))
    }
}

/// Extract the first command name from `lsof -F c` field output.
pub fn parse_lsof_command(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.strip_prefix('c'))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

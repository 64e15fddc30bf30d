//! Blocking execution of external programs.
//!
//! Programs are spawned directly (no intermediate shell) with stdout and
//! stderr captured. An optional timeout kills the child once it expires;
//! only the remote fetch uses one.

use crate::error::{DevStartError, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often a child with a timeout is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed because it ran past its timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Stdout split into lines, trailing whitespace removed, empty lines dropped.
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout
            .lines()
            .map(|l| l.trim_end().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Kill the child after this long (None = wait indefinitely).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Options that run the command inside `cwd`.
    pub fn in_dir(cwd: &Path) -> Self {
        Self {
            cwd: Some(cwd.to_path_buf()),
            ..Default::default()
        }
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add an environment variable.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }
}

/// Execute `program` with `args`, capturing its output.
///
/// Returns `Err(CommandFailed)` only when the program cannot be spawned;
/// a non-zero exit is reported through [`CommandResult::success`].
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let shown = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| {
        tracing::debug!("Failed to spawn `{}`: {}", shown, e);
        DevStartError::CommandFailed {
            command: shown.clone(),
            code: None,
        }
    })?;

    // Drain both pipes on their own threads so a chatty child never blocks
    // on a full pipe while we wait on it.
    let stdout_handle = child.stdout.take().map(drain);
    let stderr_handle = child.stderr.take().map(drain);

    let mut timed_out = false;
    let status = match options.timeout {
        None => child.wait()?,
        Some(limit) => loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if start.elapsed() >= limit {
                timed_out = true;
                let _ = child.kill();
                break child.wait()?;
            }
            thread::sleep(POLL_INTERVAL);
        },
    };

    let duration = start.elapsed();

    // A killed child may leave grandchildren holding the pipes open, so the
    // reader threads are detached instead of joined.
    let (stdout, stderr) = if timed_out {
        tracing::debug!("`{}` timed out after {:?}", shown, duration);
        (String::new(), String::new())
    } else {
        (collect(stdout_handle), collect(stderr_handle))
    };

    tracing::debug!(
        "`{}` exited with {:?} in {:?}",
        shown,
        status.code(),
        duration
    );

    Ok(CommandResult {
        exit_code: status.code(),
        stdout,
        stderr,
        duration,
        success: status.success() && !timed_out,
        timed_out,
    })
}

/// Execute a command and return success/failure.
pub fn execute_check(program: &str, args: &[&str], cwd: Option<&Path>) -> bool {
    let options = CommandOptions {
        cwd: cwd.map(|p| p.to_path_buf()),
        ..Default::default()
    };

    execute(program, args, &options)
        .map(|r| r.success)
        .unwrap_or(false)
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn collect(handle: Option<JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute("sh", &["-c", "echo hello"], &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
        assert!(!result.timed_out);
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("sh", &["-c", "exit 3"], &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn execute_captures_stderr() {
        let result = execute("sh", &["-c", "echo oops >&2"], &CommandOptions::default()).unwrap();

        assert!(result.stderr.contains("oops"));
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn execute_with_env() {
        let options = CommandOptions::default().with_env("MY_VAR", "my_value");

        let result = execute("sh", &["-c", "echo $MY_VAR"], &options).unwrap();

        assert!(result.stdout.contains("my_value"));
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();

        let result = execute("ls", &[], &CommandOptions::in_dir(temp.path())).unwrap();

        assert!(result.stdout.contains("marker.txt"));
    }

    #[test]
    fn execute_missing_program_is_command_failed() {
        let err = execute(
            "this-command-does-not-exist-12345",
            &[],
            &CommandOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, DevStartError::CommandFailed { code: None, .. }));
    }

    #[test]
    fn execute_kills_on_timeout() {
        let options = CommandOptions::default().with_timeout(Duration::from_millis(100));

        let result = execute("sh", &["-c", "sleep 5"], &options).unwrap();

        assert!(result.timed_out);
        assert!(!result.success);
        assert!(result.duration < Duration::from_secs(5));
    }

    #[test]
    fn execute_within_timeout_succeeds() {
        let options = CommandOptions::default().with_timeout(Duration::from_secs(5));

        let result = execute("sh", &["-c", "echo quick"], &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("quick"));
    }

    #[test]
    fn execute_check_returns_bool() {
        assert!(execute_check("sh", &["-c", "exit 0"], None));
        assert!(!execute_check("sh", &["-c", "exit 1"], None));
        assert!(!execute_check("this-command-does-not-exist-12345", &[], None));
    }

    #[test]
    fn stdout_lines_drops_blank_lines() {
        let result = execute(
            "sh",
            &["-c", "printf ' M a.rs\\n\\n?? b.rs\\n'"],
            &CommandOptions::default(),
        )
        .unwrap();

        assert_eq!(result.stdout_lines(), vec![" M a.rs", "?? b.rs"]);
    }
}

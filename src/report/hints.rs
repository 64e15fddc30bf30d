//! Remediation commands and suggestions.
//!
//! Commands are printed verbatim for the user to copy; nothing here is
//! ever executed.

/// Combined commit-and-push command, one line per step.
pub const COMMIT_AND_PUSH: [&str; 2] = ["git add -A && git commit -m \"your message\"", "git push"];

/// Command to update a branch that is behind its remote.
pub const PULL: &str = "git pull";

/// Command that creates a virtual environment.
pub const CREATE_VENV: &str = "python3 -m venv venv";

/// Generic command for freeing a port. `PORT` is left for the user to fill.
pub const KILL_BY_PORT: &str = "kill $(lsof -t -i:PORT)";

/// Suggestion shown with the list of changed files.
pub fn commit_or_stash() -> &'static str {
    "Commit or stash your changes before starting new work."
}

/// Suggestion for a branch that is behind its remote.
pub fn pull_latest(branch: &str) -> String {
    format!("Run `git pull` to bring {} up to date before you start.", branch)
}

/// Command that activates the virtual environment in `dir`.
pub fn activate_venv(dir: &str) -> String {
    format!("source {}/bin/activate", dir)
}

/// Suggestion shown before the activation command.
pub fn activate_first() -> &'static str {
    "Activate it before installing or running anything:"
}

/// Suggestion shown before the creation command.
pub fn create_venv_first() -> &'static str {
    "Create one to keep project dependencies isolated:"
}

/// Suggestion when several virtual environments exist.
pub fn keep_one_venv() -> &'static str {
    "Keep a single virtual environment and remove the others."
}

/// Command that creates every missing directory.
pub fn create_dirs(missing: &[&str]) -> String {
    format!("mkdir -p {}", missing.join(" "))
}

/// Suggestion shown before the directory creation command.
pub fn create_dirs_first() -> &'static str {
    "Create them with:"
}

/// Suggestion when candidate ports are taken.
pub fn free_ports() -> &'static str {
    "Stop those processes or start the app on another port."
}

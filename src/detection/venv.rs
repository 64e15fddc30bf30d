//! Python virtual-environment discovery.

use std::path::Path;

/// File whose presence makes a directory an activatable environment.
pub const ACTIVATION_MARKER: &str = "bin/activate";

/// Outcome of scanning the project root for virtual environments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VenvDiscovery {
    /// No candidate directory.
    None,
    /// Exactly one candidate directory.
    Single(String),
    /// More than one candidate; names in sorted order.
    Multiple(Vec<String>),
}

impl VenvDiscovery {
    /// Classify a list of candidate directory names.
    pub fn from_candidates(mut candidates: Vec<String>) -> Self {
        match candidates.len() {
            0 => Self::None,
            1 => Self::Single(candidates.remove(0)),
            _ => Self::Multiple(candidates),
        }
    }
}

/// Names of the immediate subdirectories of `project_root` that contain
/// [`ACTIVATION_MARKER`], sorted by name.
///
/// An unreadable root yields no candidates.
pub fn find_venv_candidates(project_root: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(project_root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot scan {}: {}", project_root.display(), e);
            return Vec::new();
        }
    };

    let mut candidates: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() && path.join(ACTIVATION_MARKER).is_file())
        .filter_map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .collect();

    candidates.sort();
    candidates
}

/// Scan `project_root` and classify what was found.
pub fn discover_venvs(project_root: &Path) -> VenvDiscovery {
    VenvDiscovery::from_candidates(find_venv_candidates(project_root))
}

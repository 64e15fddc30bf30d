//! Directory layout inspection.

use std::path::Path;

use super::file_detection::dir_exists;

/// Directories every project is expected to have, in report order.
pub const STANDARD_DIRS: &[&str] = &["src", "tests", "docs"];

/// Directories reported only when present.
pub const OPTIONAL_DIRS: &[&str] = &["scripts", "config", "data"];

/// Which of the known directories exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    /// Standard directories that exist.
    pub present: Vec<&'static str>,
    /// Optional directories that exist.
    pub optional_present: Vec<&'static str>,
    /// Standard directories that are absent, in [`STANDARD_DIRS`] order.
    pub missing: Vec<&'static str>,
}

/// Check [`STANDARD_DIRS`] and [`OPTIONAL_DIRS`] under `project_root`.
pub fn inspect_layout(project_root: &Path) -> LayoutReport {
    let mut report = LayoutReport::default();

    for &dir in STANDARD_DIRS {
        if dir_exists(project_root, dir) {
            report.present.push(dir);
        } else {
            report.missing.push(dir);
        }
    }

    report.optional_present = OPTIONAL_DIRS
        .iter()
        .copied()
        .filter(|dir| dir_exists(project_root, dir))
        .collect();

    report
}

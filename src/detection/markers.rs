//! Project marker detection.
//!
//! [`detect_project_markers`] is the single source of marker-file facts.
//! Project-type detection, port selection and the quick-start summary each
//! call it and apply their own presentation on top.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::file_detection::{file_exists, file_matches};

/// Matches a Flask dependency anywhere in `requirements.txt`.
static FLASK_REQUIREMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)flask").unwrap());

/// A heuristic signal of the project's technology stack.
///
/// Variants are ordered the way reports list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marker {
    /// `manage.py` (Django).
    ManagePy,
    /// `package.json` (Node.js).
    PackageJson,
    /// `requirements.txt` (Python).
    RequirementsTxt,
    /// `pyproject.toml` (Python).
    PyprojectToml,
    /// `Dockerfile`.
    Dockerfile,
    /// `docker-compose.yml`.
    DockerCompose,
    /// `app.py` at the root.
    AppPy,
    /// `main.py` at the root.
    MainPy,
    /// `requirements.txt` mentions Flask.
    FlaskRequirement,
}

impl Marker {
    /// Markers whose presence is a plain file-existence check.
    const FILE_MARKERS: [Marker; 8] = [
        Marker::ManagePy,
        Marker::PackageJson,
        Marker::RequirementsTxt,
        Marker::PyprojectToml,
        Marker::Dockerfile,
        Marker::DockerCompose,
        Marker::AppPy,
        Marker::MainPy,
    ];

    /// The file this marker is read from.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::ManagePy => "manage.py",
            Self::PackageJson => "package.json",
            Self::RequirementsTxt | Self::FlaskRequirement => "requirements.txt",
            Self::PyprojectToml => "pyproject.toml",
            Self::Dockerfile => "Dockerfile",
            Self::DockerCompose => "docker-compose.yml",
            Self::AppPy => "app.py",
            Self::MainPy => "main.py",
        }
    }

    /// The project-type label, for markers that name a project type.
    pub fn project_label(self) -> Option<&'static str> {
        match self {
            Self::ManagePy => Some("Django"),
            Self::PackageJson => Some("Node.js"),
            Self::RequirementsTxt | Self::PyprojectToml => Some("Python"),
            Self::Dockerfile => Some("Docker"),
            Self::DockerCompose => Some("Docker Compose"),
            Self::AppPy | Self::MainPy | Self::FlaskRequirement => None,
        }
    }
}

/// The set of markers found in a project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMarkers {
    found: BTreeSet<Marker>,
}

impl ProjectMarkers {
    /// Check whether a marker was found.
    pub fn has(&self, marker: Marker) -> bool {
        self.found.contains(&marker)
    }

    /// Iterate over found markers in report order.
    pub fn iter(&self) -> impl Iterator<Item = Marker> + '_ {
        self.found.iter().copied()
    }

    /// Project-type labels in report order.
    ///
    /// `Python` appears twice when both `requirements.txt` and
    /// `pyproject.toml` exist.
    pub fn project_labels(&self) -> Vec<&'static str> {
        self.iter().filter_map(Marker::project_label).collect()
    }
}

impl FromIterator<Marker> for ProjectMarkers {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self {
            found: iter.into_iter().collect(),
        }
    }
}

/// Detect all project markers in `project_root`.
pub fn detect_project_markers(project_root: &Path) -> ProjectMarkers {
    let mut markers: ProjectMarkers = Marker::FILE_MARKERS
        .into_iter()
        .filter(|m| file_exists(project_root, m.file_name()))
        .collect();

    if markers.has(Marker::RequirementsTxt)
        && file_matches(project_root, "requirements.txt", &FLASK_REQUIREMENT)
    {
        markers.found.insert(Marker::FlaskRequirement);
    }

    tracing::debug!("Detected markers: {:?}", markers.found);
    markers
}

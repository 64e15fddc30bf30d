//! Filesystem inspection of the project root.
//!
//! Everything here is a pure read: marker files, virtual-environment
//! candidates and the directory layout.

pub mod file_detection;
pub mod layout;
pub mod markers;
pub mod venv;

pub use layout::{inspect_layout, LayoutReport, OPTIONAL_DIRS, STANDARD_DIRS};
pub use markers::{detect_project_markers, Marker, ProjectMarkers};
pub use venv::{discover_venvs, find_venv_candidates, VenvDiscovery, ACTIVATION_MARKER};

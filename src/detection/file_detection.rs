//! File-based detection helpers.

use std::path::Path;

use regex::Regex;

/// Check if a file (or any entry) exists relative to project root.
pub fn file_exists(project_root: &Path, file: &str) -> bool {
    project_root.join(file).exists()
}

/// Check if a directory exists relative to project root.
pub fn dir_exists(project_root: &Path, dir: &str) -> bool {
    project_root.join(dir).is_dir()
}

/// Check whether a file's contents match `pattern`.
///
/// A missing or unreadable file counts as no match.
pub fn file_matches(project_root: &Path, file: &str, pattern: &Regex) -> bool {
    match std::fs::read_to_string(project_root.join(file)) {
        Ok(contents) => pattern.is_match(&contents),
        Err(e) => {
            tracing::debug!("Could not read {}: {}", file, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_exists_helper() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("manage.py"), "").unwrap();

        assert!(file_exists(temp.path(), "manage.py"));
        assert!(!file_exists(temp.path(), "package.json"));
    }

    #[test]
    fn dir_exists_ignores_plain_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("docs"), "not a directory").unwrap();

        assert!(dir_exists(temp.path(), "src"));
        assert!(!dir_exists(temp.path(), "docs"));
        assert!(!dir_exists(temp.path(), "tests"));
    }

    #[test]
    fn file_matches_reads_contents() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "requests==2.31\n").unwrap();
        let pattern = Regex::new("requests").unwrap();

        assert!(file_matches(temp.path(), "requirements.txt", &pattern));
        assert!(!file_matches(temp.path(), "missing.txt", &pattern));
    }
}

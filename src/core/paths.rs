//! Path helpers
//!
//! Template-relative names use '/' as separator on every platform; these
//! helpers translate between that form and real filesystem paths.

use std::path::{Path, PathBuf};

/// Join a root directory with a '/'-separated relative name.
pub fn join_relative(root: &Path, name: &str) -> PathBuf {
    root.join(name.replace('/', std::path::MAIN_SEPARATOR_STR))
}

/// Whether a target name already exists under the root.
pub fn file_exists(root: &Path, name: &str) -> bool {
    join_relative(root, name).exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_relative() {
        let joined = join_relative(Path::new("/project"), "tasks/Task 1.cpp");
        assert!(joined.to_string_lossy().contains("tasks"));
        assert!(joined.to_string_lossy().contains("Task 1.cpp"));
    }

    #[test]
    fn test_file_exists() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("Task 1.cpp"), "x").unwrap();

        assert!(file_exists(temp.path(), "Task 1.cpp"));
        assert!(!file_exists(temp.path(), "Task 2.cpp"));
    }
}

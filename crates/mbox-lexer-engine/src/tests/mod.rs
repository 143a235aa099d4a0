//! Shared helpers for unit tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Create a temporary directory that is removed when dropped
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Create a file with the given content inside `dir`
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

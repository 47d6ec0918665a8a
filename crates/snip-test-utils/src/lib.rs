//! Shared test utilities for the snip workspace.
//!
//! Provides [`TestWorkspace`], a temporary directory with helpers for writing
//! fixture files as lines and reading them back. It is a dev-dependency
//! only, never published.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding snippet, source and target files.
///
/// # Example
///
/// ```rust
/// use snip_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// let source = ws.write_lines("source.txt", &["a", "  hello", "b"]);
/// assert!(source.exists());
/// assert_eq!(ws.read_lines("source.txt"), vec!["a", "  hello", "b"]);
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the workspace.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `lines`, each terminated by `\n`, to `rel`. Returns the path.
    pub fn write_lines(&self, rel: &str, lines: &[&str]) -> PathBuf {
        let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
        self.write_raw(rel, &content)
    }

    /// Write `content` verbatim to `rel`. Returns the path.
    pub fn write_raw(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `rel` verbatim.
    pub fn read_raw(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("Failed to read {rel}: {e}"))
    }

    /// Read `rel` as lines.
    pub fn read_lines(&self, rel: &str) -> Vec<String> {
        self.read_raw(rel).lines().map(str::to_string).collect()
    }

    /// Assert that `rel` does not exist.
    pub fn assert_missing(&self, rel: &str) {
        assert!(!self.path(rel).exists(), "Expected {rel} to be absent");
    }
}

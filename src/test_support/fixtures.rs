//! Filesystem fixtures for common test scenarios.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::core::lock::LOCK_FILE;
use crate::core::manifest::MANIFEST_FILE;

/// A small but realistic manifest with requirements and a repository.
pub const BASIC_MANIFEST: &str = r#"{
  "name": "acme/app",
  "repositories": [
    {"type": "composer", "url": "https://packages.example.com"}
  ],
  "require": {
    "acme/core": "^2.0",
    "acme/tools": "dev-main"
  }
}"#;

/// Write a project directory holding a manifest and, optionally, a lock
/// file. Returns the directory guard and the manifest path.
pub fn write_project(manifest: &str, lock: Option<&str>) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let manifest_path = tmp.path().join(MANIFEST_FILE);
    std::fs::write(&manifest_path, manifest).unwrap();

    if let Some(lock) = lock {
        std::fs::write(tmp.path().join(LOCK_FILE), lock).unwrap();
    }

    (tmp, manifest_path)
}

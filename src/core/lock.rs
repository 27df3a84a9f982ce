//! The opaque lock document and lock file reads.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Canonical lock file name, next to the manifest.
pub const LOCK_FILE: &str = "composer.lock";

/// Error reading the existing lock file.
#[derive(Debug, Error)]
pub enum LockError {
    #[error("lock file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read lock file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lock content returned by the lock server.
///
/// The content is opaque to this crate: it is forwarded or persisted
/// byte-for-byte, never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockDocument {
    content: Vec<u8>,
}

impl LockDocument {
    /// Wrap raw response bytes.
    pub fn new(content: Vec<u8>) -> Self {
        LockDocument { content }
    }

    /// The lock content as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Consume the document, returning the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.content
    }

    /// The content as UTF-8, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// Byte length of the content.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<Vec<u8>> for LockDocument {
    fn from(content: Vec<u8>) -> Self {
        LockDocument::new(content)
    }
}

/// Read the existing lock file for operations that POST its content.
pub fn read_lock_content(path: &Path) -> Result<String, LockError> {
    if !path.exists() {
        return Err(LockError::NotFound {
            path: path.to_path_buf(),
        });
    }

    std::fs::read_to_string(path).map_err(|source| LockError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// The lock file path conventionally paired with a manifest path.
pub fn lock_path_for(manifest_path: &Path) -> PathBuf {
    manifest_path.with_file_name(LOCK_FILE)
}

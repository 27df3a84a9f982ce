//! Lock document persistence.

use std::path::Path;

use anyhow::Result;

use crate::core::lock::LockDocument;
use crate::util::fs;

/// Write a lock document to disk, byte-for-byte as the server sent it.
pub fn save_lock_document(path: &Path, lock: &LockDocument) -> Result<()> {
    fs::write_bytes(path, lock.as_bytes())?;
    tracing::info!("wrote {} bytes to {}", lock.len(), path.display());
    Ok(())
}

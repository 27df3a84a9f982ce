//! Implementation of `capstan update`.

use std::path::PathBuf;

use anyhow::Result;

use crate::ops::{build_client, lockfile, RemoteOptions};
use crate::util::context::GlobalContext;

/// Regenerate the lock file; with a package, only that package is
/// updated. Returns the path of the written lock file.
pub fn update(
    ctx: &GlobalContext,
    package: Option<&str>,
    remote: &RemoteOptions,
) -> Result<PathBuf> {
    let manifest_path = ctx.find_manifest()?;
    let client = build_client(ctx, &manifest_path, remote);

    let lock = client.update(package)?;

    let lock_path = client.config().lock_path();
    lockfile::save_lock_document(&lock_path, &lock)?;

    Ok(lock_path)
}

//! Implementation of `capstan install`.

use std::path::PathBuf;

use anyhow::Result;

use crate::ops::{build_client, lockfile, RemoteOptions};
use crate::util::context::GlobalContext;

/// Generate the lock file for the current manifest and persist it.
///
/// Returns the path of the written lock file.
pub fn install(ctx: &GlobalContext, remote: &RemoteOptions) -> Result<PathBuf> {
    let manifest_path = ctx.find_manifest()?;
    let client = build_client(ctx, &manifest_path, remote);

    let lock = client.install()?;

    let lock_path = client.config().lock_path();
    lockfile::save_lock_document(&lock_path, &lock)?;

    Ok(lock_path)
}

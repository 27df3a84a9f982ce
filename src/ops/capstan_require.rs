//! Implementation of `capstan require`.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::lock::LockDocument;
use crate::core::manifest::Manifest;
use crate::ops::{build_client, lockfile, RemoteOptions};
use crate::util::context::GlobalContext;

/// Options for requiring a package.
#[derive(Debug, Clone)]
pub struct RequireOptions {
    /// Package name
    pub package: String,

    /// Version constraint; defaults to `*`
    pub version: Option<String>,

    /// Dry run - resolve without persisting anything
    pub dry_run: bool,
}

/// Outcome of a require operation.
#[derive(Debug)]
pub enum RequireOutcome {
    /// The manifest was updated and the lock file written.
    Locked { lock_path: PathBuf },

    /// Dry run: the resolved lock content, not persisted.
    Preview { lock: LockDocument },
}

/// Add a requirement to the manifest and fetch the matching lock file.
///
/// A dry run leaves both the manifest and the lock file untouched.
pub fn require(
    ctx: &GlobalContext,
    opts: &RequireOptions,
    remote: &RemoteOptions,
) -> Result<RequireOutcome> {
    let manifest_path = ctx.find_manifest()?;
    let constraint = opts.version.as_deref().unwrap_or("*");

    if !opts.dry_run {
        let mut manifest = Manifest::load(&manifest_path)?;
        manifest.add_requirement(&opts.package, constraint)?;
    }

    let client = build_client(ctx, &manifest_path, remote);

    if opts.dry_run {
        let lock = client.dry_require(&opts.package, opts.version.as_deref())?;
        return Ok(RequireOutcome::Preview { lock });
    }

    let lock = client.require(&opts.package, opts.version.as_deref())?;
    let lock_path = client.config().lock_path();
    lockfile::save_lock_document(&lock_path, &lock)?;

    Ok(RequireOutcome::Locked { lock_path })
}

//! Implementation of `capstan outdated` and `capstan latest`.

use std::collections::BTreeMap;

use anyhow::Result;
use serde_json::{Map, Value};

use crate::client::VersionAdvice;
use crate::core::manifest::Manifest;
use crate::ops::{build_client, RemoteOptions};
use crate::util::context::GlobalContext;

/// Ask the server which locked packages are outdated.
pub fn outdated(ctx: &GlobalContext, remote: &RemoteOptions) -> Result<Map<String, Value>> {
    let manifest_path = ctx.find_manifest()?;
    let client = build_client(ctx, &manifest_path, remote);

    Ok(client.outdated()?)
}

/// Query the latest version available for every manifest requirement.
///
/// The manifest's constraint strings become the per-package constraint
/// lists sent to the server.
pub fn latest(
    ctx: &GlobalContext,
    only_stable: bool,
    remote: &RemoteOptions,
) -> Result<BTreeMap<String, VersionAdvice>> {
    let manifest_path = ctx.find_manifest()?;
    let manifest = Manifest::load(&manifest_path)?;

    let constraints: BTreeMap<String, Vec<String>> = manifest
        .requires()
        .iter()
        .map(|(package, constraint)| (package.to_string(), vec![constraint.to_string()]))
        .collect();

    let client = build_client(ctx, &manifest_path, remote);
    Ok(client.latest_version_in_constraints(&constraints, only_stable)?)
}

//! `capstan outdated` command

use anyhow::Result;
use serde_json::Value;

use crate::cli::OutdatedArgs;
use capstan::ops::{capstan_versions, RemoteOptions};
use capstan::GlobalContext;

pub fn execute(args: OutdatedArgs, remote: &RemoteOptions) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let outdated = capstan_versions::outdated(&ctx, remote)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outdated)?);
        return Ok(());
    }

    if outdated.is_empty() {
        eprintln!("All packages are up to date");
        return Ok(());
    }

    for (package, info) in &outdated {
        // The per-package info shape belongs to the server; show the
        // common fields when present.
        let current = info
            .get("current")
            .and_then(Value::as_str)
            .unwrap_or("?");
        let latest = info.get("latest").and_then(Value::as_str).unwrap_or("?");
        println!("{package} {current} -> {latest}");
    }

    Ok(())
}

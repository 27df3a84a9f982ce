//! `capstan latest` command

use anyhow::Result;

use crate::cli::LatestArgs;
use capstan::ops::{capstan_versions, RemoteOptions};
use capstan::GlobalContext;

pub fn execute(args: LatestArgs, remote: &RemoteOptions) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let latest = capstan_versions::latest(&ctx, args.stable, remote)?;

    for (package, advice) in &latest {
        match advice.version() {
            Some(version) => println!("{package}: {version} available"),
            None => println!("{package}: up to date"),
        }
    }

    Ok(())
}

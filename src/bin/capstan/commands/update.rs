//! `capstan update` command

use anyhow::Result;

use crate::cli::UpdateArgs;
use capstan::ops::{capstan_update, RemoteOptions};
use capstan::GlobalContext;

pub fn execute(args: UpdateArgs, remote: &RemoteOptions) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let lock_path = capstan_update::update(&ctx, args.package.as_deref(), remote)?;
    eprintln!("      Locked {}", lock_path.display());

    Ok(())
}

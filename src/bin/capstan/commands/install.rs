//! `capstan install` command

use anyhow::Result;

use crate::cli::InstallArgs;
use capstan::ops::{capstan_install, RemoteOptions};
use capstan::GlobalContext;

pub fn execute(_args: InstallArgs, remote: &RemoteOptions) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let lock_path = capstan_install::install(&ctx, remote)?;
    eprintln!("      Locked {}", lock_path.display());

    Ok(())
}

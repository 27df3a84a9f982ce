//! `capstan require` command

use anyhow::Result;

use crate::cli::RequireArgs;
use capstan::ops::capstan_require::{require, RequireOptions, RequireOutcome};
use capstan::ops::RemoteOptions;
use capstan::GlobalContext;

pub fn execute(args: RequireArgs, remote: &RemoteOptions) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let opts = RequireOptions {
        package: args.package,
        version: args.version,
        dry_run: args.dry_run,
    };

    match require(&ctx, &opts, remote)? {
        RequireOutcome::Locked { lock_path } => {
            eprintln!("      Locked {}", lock_path.display());
        }
        RequireOutcome::Preview { lock } => {
            // The preview is written to stdout and nowhere else.
            match lock.as_str() {
                Some(text) => println!("{text}"),
                None => eprintln!("(non-UTF-8 preview, {} bytes)", lock.len()),
            }
        }
    }

    Ok(())
}

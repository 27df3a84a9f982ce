//! Capstan CLI - delegated dependency-lock resolution

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use capstan::ops::RemoteOptions;
use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("capstan=debug")
    } else {
        EnvFilter::new("capstan=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let remote = RemoteOptions {
        url: cli.url.clone(),
    };

    // Execute command
    match cli.command {
        Commands::Install(args) => commands::install::execute(args, &remote),
        Commands::Require(args) => commands::require::execute(args, &remote),
        Commands::Update(args) => commands::update::execute(args, &remote),
        Commands::Outdated(args) => commands::outdated::execute(args, &remote),
        Commands::Latest(args) => commands::latest::execute(args, &remote),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Capstan - delegated dependency-lock resolution
#[derive(Parser)]
#[command(name = "capstan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Lock server URL (overrides configuration)
    #[arg(long, global = true, env = "CAPSTAN_URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate composer.lock for the current manifest
    Install(InstallArgs),

    /// Add a requirement and fetch the matching lock file
    Require(RequireArgs),

    /// Regenerate the lock file (optionally for a single package)
    Update(UpdateArgs),

    /// List outdated packages
    Outdated(OutdatedArgs),

    /// Show the latest versions available within the manifest constraints
    Latest(LatestArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct InstallArgs {}

#[derive(Args)]
pub struct RequireArgs {
    /// Package name
    pub package: String,

    /// Version constraint (defaults to "*")
    pub version: Option<String>,

    /// Dry run - resolve without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Package to update (defaults to everything)
    pub package: Option<String>,
}

#[derive(Args)]
pub struct OutdatedArgs {
    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct LatestArgs {
    /// Only consider stable versions
    #[arg(long)]
    pub stable: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

// CLI module for handling command-line interface

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gobump")]
#[command(about = "Check the pinned Go version against the latest release and fetch verified archives")]
pub struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        global = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct VersionInput {
    /// File to extract the current version from (go.mod, Dockerfile, JSON, ...)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Current version, given directly
    #[arg(short = 'v', long)]
    pub version: Option<String>,

    /// Use --version over --file when both are given
    #[arg(long)]
    pub prefer_version: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlatformArgs {
    /// Target operating system (windows, linux, darwin); defaults to this host
    #[arg(long)]
    pub os: Option<String>,

    /// Target architecture (386, amd64, arm64, armv6l)
    #[arg(long)]
    pub arch: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare current and latest versions, offering to download a newer one
    Check {
        #[command(flatten)]
        input: VersionInput,

        #[command(flatten)]
        platform: PlatformArgs,

        /// Directory to download into (prompted for when omitted)
        #[arg(long)]
        dest: Option<PathBuf>,

        /// Download without asking for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Print the latest upstream version
    Latest,
    /// Print the current version from a file or literal
    Current {
        #[command(flatten)]
        input: VersionInput,
    },
    /// Download and verify the archive for a version
    Download {
        version: String,

        #[command(flatten)]
        platform: PlatformArgs,

        /// Directory to download into
        #[arg(long, default_value = ".")]
        dest: PathBuf,
    },
    /// Print the SHA-256 digest of a local file
    Digest { path: PathBuf },
}

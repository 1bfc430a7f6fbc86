//! CLI argument definitions using clap.
//!
//! Hookcheck has a single mode of operation: scan a directory tree and
//! report hooks with missing dependencies, so there are no subcommands.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan (defaults to the configured source root)
    pub target: Option<PathBuf>,

    /// Additionally write the analysis report as JSON to the given path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

//! CLI argument parsing for git-removed-branches.
//!
//! Uses clap derive macros for declarative argument definitions. The run
//! itself lives in the `commands` module.

use crate::config::DEFAULT_REMOTE;
use clap::Parser;

/// Usage line shown for unknown arguments.
pub const USAGE: &str = "git removed-branches [-p|--prune] [-f|--force] [-r|--remote <remote>]";

/// Find local branches whose upstream branch was removed from the remote.
///
/// By default the branches are only listed. Pass `--prune` to delete them.
#[derive(Parser, Debug)]
#[command(name = "git-removed-branches")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = USAGE)]
pub struct Cli {
    /// Remote to compare local branches against.
    #[arg(short, long, default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Delete the branches that were found.
    #[arg(short, long)]
    pub prune: bool,

    /// Delete with `git branch -D`, even if not fully merged.
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// Help and version requests print and exit. Any other parse failure is
    /// returned so the caller can print usage and exit without running.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse().or_else(|err| {
            if err.use_stderr() {
                Err(err)
            } else {
                err.exit()
            }
        })
    }
}

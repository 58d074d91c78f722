//! Command implementations for git-removed-branches.

mod prune;

pub use prune::PruneSummary;
use prune::cmd_prune;

use crate::cli::Cli;
use crate::config::{GitSettings, RunConfig};
use crate::error::{BranchesError, Result};
use crate::git::Git;
use tracing::debug;

/// Run the tool for the parsed command line in the current directory.
///
/// The repository check comes first; nothing else runs outside a repository.
pub fn dispatch(cli: Cli) -> Result<PruneSummary> {
    let config = RunConfig::from_cli(&cli);
    let settings = GitSettings::from_env()?;
    let cwd = std::env::current_dir()
        .map_err(|e| BranchesError::Io(format!("failed to read current directory: {}", e)))?;

    let git = Git::new(cwd, settings);
    let root = git.repo_root()?;
    debug!(root = %root.display(), ?settings, "repository found");

    cmd_prune(&git, &config)
}

//! Diagnostic logging for git-removed-branches.
//!
//! Off unless `GIT_REMOVED_BRANCHES_LOG` holds a tracing filter directive
//! (`debug`, `git_removed_branches=trace`, ...). Logs go to stderr so they
//! never mix with the branch report on stdout.

use crate::error::{BranchesError, Result};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GIT_REMOVED_BRANCHES_LOG";

/// Build the filter from the environment, `None` when logging is disabled.
///
/// A directive tracing can't parse is a configuration error.
pub fn filter_from_env() -> Result<Option<EnvFilter>> {
    let Ok(directive) = std::env::var(LOG_ENV) else {
        return Ok(None);
    };
    let directive = directive.trim();
    if directive.is_empty() {
        return Ok(None);
    }

    EnvFilter::try_new(directive).map(Some).map_err(|e| {
        BranchesError::Config(format!(
            "{} is not a valid log filter ('{}'): {}",
            LOG_ENV, directive, e
        ))
    })
}

/// Install the stderr subscriber if logging is enabled.
pub fn init_logging() -> Result<()> {
    let Some(filter) = filter_from_env()? else {
        return Ok(());
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact()
        .try_init();
    Ok(())
}

//! Run configuration for git-removed-branches.
//!
//! `RunConfig` is built once from the command line and read-only for the
//! rest of the run. `GitSettings` carries the gateway knobs that come from
//! the environment.

use crate::cli::Cli;
use crate::error::{BranchesError, Result};

/// Remote used when `--remote` is not given.
pub const DEFAULT_REMOTE: &str = "origin";

/// Environment variable holding the maximum captured output per stream, in bytes.
pub const MAX_BUFFER_ENV: &str = "GIT_REMOVED_BRANCHES_MAX_BUFFER";

/// What a single run should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Remote whose branches are the reference.
    pub remote: String,
    /// Delete stale branches instead of only listing them.
    pub remove: bool,
    /// Use `git branch -D` instead of `-d`.
    pub force: bool,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            remote: cli.remote.clone(),
            remove: cli.prune,
            force: cli.force,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            remove: false,
            force: false,
        }
    }
}

/// Settings for the git command gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GitSettings {
    /// Maximum bytes captured from each of stdout/stderr. `None` = unbounded.
    pub max_buffer: Option<usize>,
}

impl GitSettings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(MAX_BUFFER_ENV).ok();
        Ok(Self {
            max_buffer: parse_max_buffer(raw.as_deref())?,
        })
    }
}

/// Parse the max buffer setting. Unset or blank means unbounded.
pub fn parse_max_buffer(raw: Option<&str>) -> Result<Option<usize>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<usize>() {
        Ok(0) => Err(BranchesError::Config(format!(
            "{} must be greater than zero",
            MAX_BUFFER_ENV
        ))),
        Ok(limit) => Ok(Some(limit)),
        Err(_) => Err(BranchesError::Config(format!(
            "{} must be a number of bytes, got '{}'",
            MAX_BUFFER_ENV, raw
        ))),
    }
}

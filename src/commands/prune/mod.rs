//! Implementation of the prune run.
//!
//! Finds local branches whose upstream branch is gone from the remote and
//! either lists them or deletes them.
//!
//! # Safety
//!
//! - Default behavior is report-only (prints what would be removed)
//! - Requires `--prune` to actually delete branches
//! - Uses `git branch -d` unless `--force` is given, so unmerged work is
//!   kept by default
//!
//! # Degraded mode
//!
//! When the remote isn't configured or can't be reached, the locally cached
//! remote-tracking branches are used instead of the live list.

mod display;
mod eliminate;
mod types;


use crate::branches::{
    collect_local_branches, compute_stale, reconcile, require_remote_name,
    resolve_cached_remote_branches, resolve_live_branches,
};
use crate::config::RunConfig;
use crate::error::Result;
use crate::git::Git;
use tracing::{debug, info};

use display::{connectivity_warnings, drift_warning, eprint_lines};
use eliminate::eliminate;
pub use types::PruneSummary;

/// Execute a prune run against the repository `git` points at.
///
/// Stages run strictly in order; each feeds the next. Only a failing local
/// branch listing or an unexpected remote failure aborts the run.
pub fn cmd_prune(git: &Git, config: &RunConfig) -> Result<PruneSummary> {
    require_remote_name(&config.remote)?;
    debug!(cwd = %git.cwd().display(), remote = %config.remote, "starting prune run");

    let local = collect_local_branches(git, &config.remote)?;
    let live = resolve_live_branches(git, &config.remote)?;
    let cached = resolve_cached_remote_branches(git, &config.remote)?;

    eprint_lines(&connectivity_warnings(&config.remote, &live.connectivity));
    let reconciliation = reconcile(live, cached);
    eprint_lines(&drift_warning(&reconciliation.drifted));

    let stale = compute_stale(&local, &reconciliation.ground_truth);
    info!(
        local = local.len(),
        remote = reconciliation.ground_truth.len(),
        stale = stale.len(),
        no_connection = reconciliation.no_connection,
        "computed stale branches"
    );

    let report = eliminate(git, &stale, config.remove, config.force);

    Ok(PruneSummary {
        drifted: reconciliation.drifted,
        no_connection: reconciliation.no_connection,
        report,
    })
}

//! Branch reconciliation: which local branches lost their upstream.
//!
//! Stages, in the order a run calls them:
//! 1. [`collect_local_branches`] - local branches tracking the remote
//! 2. [`resolve_live_branches`] - what the remote has right now
//! 3. [`resolve_cached_remote_branches`] - what the local cache thinks it has
//! 4. [`reconcile`] - pick the ground truth, detect drift
//! 5. [`compute_stale`] - local branches whose upstream is gone

mod local;
mod remote;
mod stale;
mod types;

use crate::error::{BranchesError, Result};

pub use local::collect_local_branches;
pub use remote::{reconcile, resolve_cached_remote_branches, resolve_live_branches};
pub use stale::compute_stale;
pub use types::Connectivity;

/// Reject an empty remote name before any remote query runs.
pub fn require_remote_name(remote: &str) -> Result<()> {
    if remote.is_empty() {
        Err(BranchesError::EmptyRemote)
    } else {
        Ok(())
    }
}

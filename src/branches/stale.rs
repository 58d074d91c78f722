//! Stale set calculation.

use super::types::{LocalBranch, RemoteBranchSet};
use tracing::debug;

/// Names of local branches whose upstream branch is missing from `remote_branches`.
///
/// The upstream branch is compared, not the local name, so a branch pushed
/// under a different name is judged by what it actually tracks. Output keeps
/// collection order.
pub fn compute_stale(
    local_branches: &[LocalBranch],
    remote_branches: &RemoteBranchSet,
) -> Vec<String> {
    local_branches
        .iter()
        .filter(|branch| !remote_branches.contains(&branch.upstream_branch))
        .map(|branch| {
            debug!(
                branch = %branch.name,
                upstream = %format!("{}/{}", branch.upstream_remote, branch.upstream_branch),
                "upstream branch is gone"
            );
            branch.name.clone()
        })
        .collect()
}

//! Local branch collection.
//!
//! Lists every local branch together with its upstream in a single
//! `for-each-ref` call and keeps the ones tracking the target remote.

use super::types::LocalBranch;
use crate::error::Result;
use crate::git::{Git, split_non_empty_lines};
use tracing::debug;

/// `<branch name><TAB><full upstream ref>`; ref names can't contain tabs.
///
/// `lstrip=2` drops exactly `refs/heads/`. `short` would turn a branch that
/// shares its name with a tag into `heads/<name>`.
pub const LOCAL_BRANCH_FORMAT: &str = "--format=%(refname:lstrip=2)%09%(upstream)";

const REMOTE_TRACKING_PREFIX: &str = "refs/remotes/";

/// Collect local branches whose upstream lives on `remote`.
///
/// Any git failure here is fatal for the run.
pub fn collect_local_branches(git: &Git, remote: &str) -> Result<Vec<LocalBranch>> {
    let output = git.run(&["for-each-ref", LOCAL_BRANCH_FORMAT, "refs/heads"])?;
    let branches = parse_local_branches(&output.stdout, remote);

    debug!(remote, count = branches.len(), "collected local branches");
    Ok(branches)
}

/// Parse `for-each-ref` output produced with [`LOCAL_BRANCH_FORMAT`].
pub fn parse_local_branches(stdout: &str, remote: &str) -> Vec<LocalBranch> {
    split_non_empty_lines(stdout)
        .into_iter()
        .filter_map(|line| {
            let (name, upstream) = split_branch_line(line)?;
            let upstream_branch = upstream_branch_on(upstream, remote)?;
            Some(LocalBranch {
                name: name.to_string(),
                upstream_remote: remote.to_string(),
                upstream_branch: upstream_branch.to_string(),
            })
        })
        .collect()
}

/// Split one listing line into branch name and raw upstream ref.
///
/// Branches without an upstream yield an empty upstream.
fn split_branch_line(line: &str) -> Option<(&str, &str)> {
    let (name, upstream) = line.split_once('\t').unwrap_or((line, ""));
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some((name, upstream.trim()))
    }
}

/// Branch path of `upstream` on `remote`, if it tracks that remote.
///
/// `refs/remotes/origin/feature/x` on `origin` gives `feature/x`. Upstreams
/// on other remotes, local upstreams (`refs/heads/...`) and empty upstreams
/// give `None`.
pub fn upstream_branch_on<'a>(upstream: &'a str, remote: &str) -> Option<&'a str> {
    upstream
        .strip_prefix(REMOTE_TRACKING_PREFIX)?
        .strip_prefix(remote)?
        .strip_prefix('/')
        .filter(|branch| !branch.is_empty())
}

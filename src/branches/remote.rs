//! Remote state resolution.
//!
//! Two views of the remote are collected: the live branch set straight from
//! the remote (`ls-remote`) and the locally cached remote-tracking branches
//! (`branch -r`). [`reconcile`] picks the one downstream stages trust.

use super::require_remote_name;
use super::types::{Connectivity, LiveBranches, Reconciliation, RemoteBranchSet};
use crate::error::{GitErrorKind, Result};
use crate::git::{Git, split_non_empty_lines};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static HEADS_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"refs/heads/(\S+)").expect("Invalid heads ref regex"));

/// Query the remote itself for its current branches.
///
/// An empty `remote` is a configuration error. A remote that isn't
/// configured, or that git can't reach (exit 128), is not an error: the
/// result is an empty set with [`LiveBranches::no_connection`] set so the
/// caller can fall back to cached state. Any other git failure propagates.
pub fn resolve_live_branches(git: &Git, remote: &str) -> Result<LiveBranches> {
    require_remote_name(remote)?;

    let remotes = git.run(&["remote", "-v"])?;
    let available = parse_remote_names(&remotes.stdout);
    if !available.iter().any(|name| name == remote) {
        warn!(remote, ?available, "remote is not configured");
        return Ok(LiveBranches {
            branches: RemoteBranchSet::new(),
            connectivity: Connectivity::RemoteNotConfigured { available },
        });
    }

    match git.run(&["ls-remote", "--heads", remote]) {
        Ok(output) => {
            let branches = parse_live_branches(&output.stdout);
            debug!(remote, count = branches.len(), "resolved live branches");
            Ok(LiveBranches {
                branches,
                connectivity: Connectivity::Connected,
            })
        }
        Err(err) if err.git_kind() == Some(GitErrorKind::Fatal) => {
            warn!(remote, error = %err, "unable to reach remote");
            Ok(LiveBranches {
                branches: RemoteBranchSet::new(),
                connectivity: Connectivity::Unreachable {
                    message: err.to_string(),
                },
            })
        }
        Err(err) => Err(err),
    }
}

/// Collect the locally cached remote-tracking branches of `remote`.
pub fn resolve_cached_remote_branches(git: &Git, remote: &str) -> Result<RemoteBranchSet> {
    let output = git.run(&["branch", "-r"])?;
    let branches = parse_cached_branches(&output.stdout, remote);

    if branches.is_empty() {
        debug!(remote, "no remote-tracking branches cached for remote");
    } else {
        debug!(remote, count = branches.len(), "resolved cached remote branches");
    }
    Ok(branches)
}

/// Decide which remote branch set is the ground truth.
///
/// Connected: the live set wins, and cached names missing from it are
/// reported as drift. Not connected: the cached set stands in.
pub fn reconcile(live: LiveBranches, cached: RemoteBranchSet) -> Reconciliation {
    if live.no_connection() {
        return Reconciliation {
            ground_truth: cached,
            no_connection: true,
            drifted: Vec::new(),
        };
    }

    let drifted = cached
        .difference(&live.branches)
        .into_iter()
        .map(str::to_string)
        .collect();

    Reconciliation {
        ground_truth: live.branches,
        no_connection: false,
        drifted,
    }
}

/// Remote names from `git remote -v`, de-duplicated, in listing order.
pub fn parse_remote_names(stdout: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in split_non_empty_lines(stdout)
        .into_iter()
        .filter_map(|line| line.split_whitespace().next())
    {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Branch names from `git ls-remote --heads` output.
pub fn parse_live_branches(stdout: &str) -> RemoteBranchSet {
    split_non_empty_lines(stdout)
        .into_iter()
        .filter_map(|line| HEADS_REF_REGEX.captures(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Branch names of `remote` from `git branch -r` output.
///
/// The symbolic `<remote>/HEAD -> <remote>/main` entry is skipped.
pub fn parse_cached_branches(stdout: &str, remote: &str) -> RemoteBranchSet {
    split_non_empty_lines(stdout)
        .into_iter()
        .filter_map(|line| line.split_whitespace().next())
        .filter_map(|entry| entry.strip_prefix(remote)?.strip_prefix('/'))
        .filter(|name| !name.is_empty() && *name != "HEAD")
        .collect()
}

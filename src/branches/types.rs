//! Data types shared by the reconciliation stages.

use std::collections::BTreeSet;

/// A local branch tracking a branch on the target remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranch {
    /// Local branch name.
    pub name: String,
    /// Remote the upstream lives on.
    pub upstream_remote: String,
    /// Branch name on the remote side (may differ from `name`).
    pub upstream_branch: String,
}

/// Branch names believed to exist on a remote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteBranchSet(BTreeSet<String>);

impl RemoteBranchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names present here but missing from `other`, sorted.
    pub fn difference<'a>(&'a self, other: &'a RemoteBranchSet) -> Vec<&'a str> {
        self.0.difference(&other.0).map(String::as_str).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for RemoteBranchSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// How the live query against the remote went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connectivity {
    /// `ls-remote` answered; the live set is authoritative.
    Connected,
    /// The remote name isn't configured in this repository.
    RemoteNotConfigured { available: Vec<String> },
    /// The remote exists but couldn't be reached.
    Unreachable { message: String },
}

/// Result of querying the remote directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveBranches {
    pub branches: RemoteBranchSet,
    pub connectivity: Connectivity,
}

impl LiveBranches {
    pub fn no_connection(&self) -> bool {
        self.connectivity != Connectivity::Connected
    }
}

/// The remote branch set the stale calculation runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Live set when connected, cached set otherwise.
    pub ground_truth: RemoteBranchSet,
    /// True when the cached set had to stand in for the live one.
    pub no_connection: bool,
    /// Cached names the remote no longer has (empty when `no_connection`).
    pub drifted: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_branch_set_difference_is_sorted() {
        let cached: RemoteBranchSet = ["zeta", "alpha", "master"].into_iter().collect();
        let live: RemoteBranchSet = ["master"].into_iter().collect();
        assert_eq!(cached.difference(&live), vec!["alpha", "zeta"]);
        assert!(live.difference(&cached).is_empty());
    }

    #[test]
    fn remote_branch_set_deduplicates() {
        let set: RemoteBranchSet = ["master", "master"].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains("master"));
        assert!(!set.contains("main"));
    }

    #[test]
    fn no_connection_unless_connected() {
        let live = |connectivity| LiveBranches {
            branches: RemoteBranchSet::new(),
            connectivity,
        };
        assert!(!live(Connectivity::Connected).no_connection());
        assert!(
            live(Connectivity::RemoteNotConfigured {
                available: vec![]
            })
            .no_connection()
        );
        assert!(
            live(Connectivity::Unreachable {
                message: "fatal".to_string()
            })
            .no_connection()
        );
    }
}

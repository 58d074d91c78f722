//! Data types for the prune command.

/// Which `git branch` delete flag to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// `-d`: refuses branches with unmerged commits.
    Safe,
    /// `-D`: deletes regardless of merge state.
    Force,
}

impl DeleteMode {
    pub fn from_force(force: bool) -> Self {
        if force { DeleteMode::Force } else { DeleteMode::Safe }
    }

    pub fn flag(self) -> &'static str {
        match self {
            DeleteMode::Safe => "-d",
            DeleteMode::Force => "-D",
        }
    }
}

/// Result of trying to delete one stale branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionOutcome {
    pub branch: String,
    pub succeeded: bool,
    /// git's own output on success (`Deleted branch ...`).
    pub output: String,
    pub error_message: Option<String>,
}

/// What the elimination stage did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EliminationReport {
    /// Stale branches, in collection order.
    pub found: Vec<String>,
    /// One entry per attempted deletion; empty in report-only mode.
    pub outcomes: Vec<DeletionOutcome>,
}

impl EliminationReport {
    /// Branches whose deletion failed.
    pub fn broken(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.succeeded)
            .map(|o| o.branch.as_str())
            .collect()
    }

    /// Branches that were deleted.
    pub fn removed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.succeeded)
            .map(|o| o.branch.as_str())
            .collect()
    }
}

/// Everything a prune run observed and did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneSummary {
    /// Cached remote-tracking branches the remote no longer has.
    pub drifted: Vec<String>,
    /// The cached set was used because the remote couldn't be queried.
    pub no_connection: bool,
    pub report: EliminationReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(branch: &str, succeeded: bool) -> DeletionOutcome {
        DeletionOutcome {
            branch: branch.to_string(),
            succeeded,
            output: String::new(),
            error_message: (!succeeded).then(|| "not fully merged".to_string()),
        }
    }

    #[test]
    fn delete_mode_flags() {
        assert_eq!(DeleteMode::from_force(false).flag(), "-d");
        assert_eq!(DeleteMode::from_force(true).flag(), "-D");
    }

    #[test]
    fn report_splits_broken_and_removed() {
        let report = EliminationReport {
            found: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            outcomes: vec![outcome("a", true), outcome("b", false), outcome("c", true)],
        };
        assert_eq!(report.broken(), vec!["b"]);
        assert_eq!(report.removed(), vec!["a", "c"]);
    }
}

//! Reporting or deleting stale branches.

use super::display::{NO_REMOVED_BRANCHES, found_report, print_lines, removal_summary};
use super::types::{DeleteMode, DeletionOutcome, EliminationReport};
use crate::git::Git;
use tracing::{info, warn};

/// Report the stale branches, or delete them when `remove` is set.
///
/// Deletions run one by one in collection order. A failed deletion is
/// recorded and the batch continues.
pub fn eliminate(git: &Git, stale: &[String], remove: bool, force: bool) -> EliminationReport {
    let mut report = EliminationReport {
        found: stale.to_vec(),
        outcomes: Vec::new(),
    };

    if stale.is_empty() {
        println!("{}", NO_REMOVED_BRANCHES);
        return report;
    }

    if !remove {
        print_lines(&found_report(stale));
        return report;
    }

    let mode = DeleteMode::from_force(force);
    for branch in stale {
        println!();
        println!("Removing \"{}\"", branch);

        let outcome = delete_branch(git, branch, mode);
        match &outcome.error_message {
            None => {
                if !outcome.output.is_empty() {
                    println!("{}", outcome.output);
                }
            }
            Some(message) => println!("ERROR: Unable to remove: {}", message),
        }
        report.outcomes.push(outcome);
    }

    println!();
    print_lines(&removal_summary(&report.broken()));

    info!(
        removed = report.removed().len(),
        broken = report.broken().len(),
        "stale branch removal finished"
    );
    report
}

/// Delete a single local branch.
///
/// The name goes to git as its own argument, so shell metacharacters such
/// as `#` need no further quoting.
pub fn delete_branch(git: &Git, branch: &str, mode: DeleteMode) -> DeletionOutcome {
    let failure = |message: String| {
        warn!(branch, %message, "failed to delete branch");
        DeletionOutcome {
            branch: branch.to_string(),
            succeeded: false,
            output: String::new(),
            error_message: Some(message),
        }
    };

    match git.run_allow_failure(&["branch", mode.flag(), branch]) {
        Ok(output) if output.success() => DeletionOutcome {
            branch: branch.to_string(),
            succeeded: true,
            output: output.stdout,
            error_message: None,
        },
        Ok(output) => failure(output.failure_message().to_string()),
        Err(err) => failure(err.to_string()),
    }
}

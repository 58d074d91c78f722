//! Text for prune command output.
//!
//! Everything is built as lines so the exact wording can be tested without
//! capturing stdout.

use crate::branches::Connectivity;

pub const NO_REMOVED_BRANCHES: &str = "No removed branches found";

/// Warning for a remote name that isn't configured.
pub fn unknown_remote_warning(remote: &str, available: &[String]) -> String {
    let available = if available.is_empty() {
        "(none)".to_string()
    } else {
        available.join(", ")
    };
    format!(
        "WARNING: Remote \"{}\" is not configured. Available remotes: {}",
        remote, available
    )
}

/// Warnings explaining why the live query didn't happen or didn't count.
pub fn connectivity_warnings(remote: &str, connectivity: &Connectivity) -> Vec<String> {
    match connectivity {
        Connectivity::Connected => Vec::new(),
        Connectivity::RemoteNotConfigured { available } => vec![
            unknown_remote_warning(remote, available),
            "WARNING: Unable to connect to remote host".to_string(),
        ],
        Connectivity::Unreachable { .. } => {
            vec!["WARNING: Unable to connect to remote host".to_string()]
        }
    }
}

/// Warning listing cached remote-tracking branches that need pruning.
pub fn drift_warning(drifted: &[String]) -> Vec<String> {
    if drifted.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![
        "WARNING: Your git repository is outdated, please run \"git fetch -p\"".to_string(),
        "         Following branches are not pruned:".to_string(),
        String::new(),
    ];
    lines.extend(drifted.iter().map(|name| format!("         - {}", name)));
    lines.push(String::new());
    lines
}

/// Report-only listing of stale branches.
pub fn found_report(stale: &[String]) -> Vec<String> {
    let mut lines = vec!["Found removed branches:".to_string()];
    lines.extend(stale.iter().map(|name| format!("  - {}", name)));
    lines.push(String::new());
    lines.push("INFO: To remove all found branches use --prune flag".to_string());
    lines
}

/// Closing lines after a removal run.
pub fn removal_summary(broken: &[&str]) -> Vec<String> {
    if broken.is_empty() {
        return vec!["INFO: All branches are removed".to_string()];
    }

    let mut lines = vec!["Not all branches are removed:".to_string()];
    lines.extend(broken.iter().map(|name| format!("  - {}", name)));
    lines.push(String::new());
    lines.push("INFO: To force removal use --force flag".to_string());
    lines
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn eprint_lines(lines: &[String]) {
    for line in lines {
        eprintln!("{}", line);
    }
}

//! git-removed-branches: find and prune local branches whose upstream is gone.
//!
//! This is the main entry point. It parses arguments, runs the prune
//! command, and maps errors to messages and exit codes.

mod branches;
mod cli;
mod commands;
mod config;
mod error;
mod exit_codes;
mod git;
mod logging;

#[cfg(test)]
mod test_support;

use cli::Cli;
use error::BranchesError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // clap's rendering includes the usage line.
            let _ = err.print();
            return ExitCode::from(exit_codes::FAILURE as u8);
        }
    };

    if let Err(err) = logging::init_logging() {
        eprintln!("ERROR: {}", err);
        return ExitCode::from(err.exit_code() as u8);
    }

    match commands::dispatch(cli) {
        Ok(summary) => {
            tracing::debug!(
                stale = summary.report.found.len(),
                drifted = summary.drifted.len(),
                no_connection = summary.no_connection,
                "run finished"
            );
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            match &err {
                BranchesError::NotARepository => eprintln!("ERROR: Not a git repository"),
                _ => eprintln!("ERROR: {}", err),
            }
            tracing::debug!(code = err.code(), "run aborted");

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

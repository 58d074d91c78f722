//! Error types for git-removed-branches.
//!
//! Uses thiserror for derive macros. Recoverable conditions (unreachable
//! remote, per-branch deletion failures) never become errors; everything
//! here aborts the run.

use crate::exit_codes;
use thiserror::Error;

/// Classification of a failed git invocation.
///
/// Raw exit codes are mapped here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitErrorKind {
    /// git died with `fatal:` (exit 128): not a repository, remote
    /// unreachable, unknown ref, ...
    Fatal,
    /// Any other non-zero exit.
    Failed,
}

impl GitErrorKind {
    /// Map a raw git exit code to its kind.
    pub fn from_exit_code(code: i32) -> Self {
        if code == exit_codes::GIT_FATAL {
            GitErrorKind::Fatal
        } else {
            GitErrorKind::Failed
        }
    }
}

/// Main error type for git-removed-branches.
#[derive(Error, Debug)]
pub enum BranchesError {
    /// The working directory is not inside a git repository.
    #[error("Not a git repository")]
    NotARepository,

    /// The remote name is empty.
    #[error("remote name must not be empty (use --remote <name>)")]
    EmptyRemote,

    /// A git command exited non-zero and the caller did not handle it.
    #[error("git {command} failed (exit code {exit_code}): {message}")]
    Git {
        kind: GitErrorKind,
        command: String,
        exit_code: i32,
        message: String,
    },

    /// A git command produced more output than the configured maximum.
    #[error("output of git {command} exceeded the maximum buffer of {limit} bytes")]
    BufferExceeded { command: String, limit: usize },

    /// git could not be executed at all.
    #[error("{0}")]
    GitUnavailable(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Filesystem or process I/O failure outside of git itself.
    #[error("{0}")]
    Io(String),
}

impl BranchesError {
    /// Distinguishable marker code for the boundary layer.
    pub fn code(&self) -> i32 {
        match self {
            BranchesError::NotARepository => exit_codes::GIT_FATAL,
            BranchesError::EmptyRemote => exit_codes::EMPTY_REMOTE,
            BranchesError::Git { exit_code, .. } => *exit_code,
            _ => exit_codes::FAILURE,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }

    /// Returns the git failure kind, if this is a git command failure.
    pub fn git_kind(&self) -> Option<GitErrorKind> {
        match self {
            BranchesError::Git { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for git-removed-branches operations.
pub type Result<T> = std::result::Result<T, BranchesError>;

//! Exit code constants for git-removed-branches.
//!
//! The process itself only ever exits with:
//! - 0: Success
//! - 1: Any fatal error (including bad arguments)
//!
//! Two fatal categories carry a marker code internally so the boundary
//! layer can print a specific message for them:
//! - 128: git died (used for "not a git repository")
//! - 1984: empty/misconfigured remote name

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Fatal error: bad arguments, failing git command, invalid configuration.
pub const FAILURE: i32 = 1;

/// Exit status git uses when it dies with `fatal:`.
pub const GIT_FATAL: i32 = 128;

/// Marker for an empty remote name.
pub const EMPTY_REMOTE: i32 = 1984;

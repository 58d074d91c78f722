//! Git command runner for git-removed-branches.
//!
//! Provides a wrapper around git commands with captured stdout/stderr,
//! bounded output buffers and structured error handling. All git operations
//! should go through this module.

use crate::config::GitSettings;
use crate::error::{BranchesError, GitErrorKind, Result};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Output of a git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
    /// Exit code, or -1 if the process was terminated by a signal.
    pub exit_code: i32,
}

impl GitOutput {
    /// Returns true if the command exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Best message describing a failure: stderr, falling back to stdout.
    pub fn failure_message(&self) -> &str {
        if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Split text on newlines, trim every line and drop the empty ones.
pub fn split_non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Render git arguments as a shell-quoted command line (for messages only).
pub fn render_command(args: &[&str]) -> String {
    shell_words::join(args)
}

/// Runs git in a fixed working directory.
///
/// Arguments are handed to git as an argv vector, never through a shell,
/// so branch names containing `#`, quotes or spaces arrive intact.
#[derive(Debug, Clone)]
pub struct Git {
    cwd: PathBuf,
    max_buffer: Option<usize>,
}

impl Git {
    pub fn new<P: Into<PathBuf>>(cwd: P, settings: GitSettings) -> Self {
        Self {
            cwd: cwd.into(),
            max_buffer: settings.max_buffer,
        }
    }

    /// The working directory commands run in.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Run a git command, failing on non-zero exit.
    ///
    /// # Returns
    ///
    /// * `Ok(GitOutput)` - On exit code 0
    /// * `Err(BranchesError::Git)` - On non-zero exit, classified by [`GitErrorKind`]
    /// * `Err(BranchesError::BufferExceeded)` - When output exceeds the configured maximum
    pub fn run(&self, args: &[&str]) -> Result<GitOutput> {
        let output = self.execute(args)?;

        if output.success() {
            Ok(output)
        } else {
            Err(BranchesError::Git {
                kind: GitErrorKind::from_exit_code(output.exit_code),
                command: render_command(args),
                exit_code: output.exit_code,
                message: output.failure_message().to_string(),
            })
        }
    }

    /// Run a git command and return its output even when it exits non-zero.
    ///
    /// Only spawn failures and buffer overflows are reported as errors.
    pub fn run_allow_failure(&self, args: &[&str]) -> Result<GitOutput> {
        self.execute(args)
    }

    /// Get the repository root using `git rev-parse --show-toplevel`.
    ///
    /// Returns `BranchesError::NotARepository` when git dies because the
    /// working directory is outside any repository.
    pub fn repo_root(&self) -> Result<PathBuf> {
        match self.run(&["rev-parse", "--show-toplevel"]) {
            Ok(output) => Ok(PathBuf::from(output.stdout)),
            Err(err) if err.git_kind() == Some(GitErrorKind::Fatal) => {
                Err(BranchesError::NotARepository)
            }
            Err(err) => Err(err),
        }
    }

    fn execute(&self, args: &[&str]) -> Result<GitOutput> {
        let command = render_command(args);

        let mut child = Command::new("git")
            .current_dir(&self.cwd)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                BranchesError::GitUnavailable(format!(
                    "failed to execute git {}: {} (is git installed?)",
                    command, e
                ))
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let limit = self.max_buffer;

        // Both pipes are drained concurrently so a chatty stderr can't
        // block the child while we sit on stdout.
        let (stdout, stderr) = std::thread::scope(|scope| {
            let stderr_reader = scope.spawn(move || read_captured(stderr, limit));
            let stdout = read_captured(stdout, limit);
            let stderr = stderr_reader
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stderr reader panicked")));
            (stdout, stderr)
        });

        let status = child.wait().map_err(|e| {
            BranchesError::Io(format!("failed to wait for git {}: {}", command, e))
        })?;

        let read_error = |e: io::Error| {
            BranchesError::Io(format!("failed to read output of git {}: {}", command, e))
        };
        let stdout = stdout.map_err(read_error)?;
        let stderr = stderr.map_err(read_error)?;

        let (Captured::Complete(stdout), Captured::Complete(stderr)) = (stdout, stderr) else {
            debug!(%command, ?limit, "git output exceeded maximum buffer");
            return Err(BranchesError::BufferExceeded {
                command,
                limit: limit.unwrap_or_default(),
            });
        };

        let output = GitOutput {
            stdout: String::from_utf8_lossy(&stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            exit_code: status.code().unwrap_or(-1),
        };
        debug!(%command, exit_code = output.exit_code, "git finished");

        Ok(output)
    }
}

enum Captured {
    Complete(Vec<u8>),
    Exceeded,
}

/// Read a pipe to the end, keeping at most `limit` bytes.
///
/// Past the limit the rest of the stream is drained and discarded.
fn read_captured<R: Read>(reader: Option<R>, limit: Option<usize>) -> io::Result<Captured> {
    let Some(mut reader) = reader else {
        return Ok(Captured::Complete(Vec::new()));
    };

    let mut buf = Vec::new();
    match limit {
        None => {
            reader.read_to_end(&mut buf)?;
            Ok(Captured::Complete(buf))
        }
        Some(limit) => {
            (&mut reader).take((limit as u64).saturating_add(1)).read_to_end(&mut buf)?;
            if buf.len() > limit {
                io::copy(&mut reader, &mut io::sink())?;
                Ok(Captured::Exceeded)
            } else {
                Ok(Captured::Complete(buf))
            }
        }
    }
}

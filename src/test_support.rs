use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A single repository with one commit on `master` and no remotes.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_work_repo(temp_dir.path());
    temp_dir
}

/// A bare "remote" repository plus a working repository that tracks it as `origin`.
pub(crate) struct RemoteFixture {
    _temp_dir: TempDir,
    pub(crate) bare: PathBuf,
    pub(crate) work: PathBuf,
}

impl RemoteFixture {
    /// Working repo on `master`, pushed to `origin` with upstream set.
    pub(crate) fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let bare = temp_dir.path().join("bare.git");
        let work = temp_dir.path().join("work");
        std::fs::create_dir_all(&bare).unwrap();
        std::fs::create_dir_all(&work).unwrap();

        git(&bare, &["init", "--bare"]);
        git(&bare, &["symbolic-ref", "HEAD", "refs/heads/master"]);

        init_work_repo(&work);
        let bare_str = bare.to_string_lossy().to_string();
        git(&work, &["remote", "add", "origin", &bare_str]);
        git(&work, &["push", "-u", "origin", "master"]);

        Self {
            _temp_dir: temp_dir,
            bare,
            work,
        }
    }

    /// The layout exercised by the end-to-end tests:
    ///
    /// - `master`: live
    /// - `feature/fast-forwarded`: deleted on the remote, merged
    /// - `#333-work`: deleted on the remote, merged
    /// - `chore/local-name-deleted` -> `chore/remote-name-deleted`: deleted on the remote
    /// - `chore/local-name-persistent` -> `chore/remote-name-persistent`: live
    /// - `no-ff`: deleted on the remote, carries an unmerged commit
    pub(crate) fn with_removed_branches() -> Self {
        let fixture = Self::new();

        fixture.branch("feature/fast-forwarded");
        fixture.branch("#333-work");
        fixture.branch("chore/local-name-deleted");
        fixture.branch("chore/local-name-persistent");
        fixture.branch("no-ff");
        fixture.commit_on("no-ff", "no-ff.txt");

        fixture.push("feature/fast-forwarded");
        fixture.push("#333-work");
        fixture.push_as("chore/local-name-deleted", "chore/remote-name-deleted");
        fixture.push_as("chore/local-name-persistent", "chore/remote-name-persistent");
        fixture.push("no-ff");

        fixture.delete_remote_branch("feature/fast-forwarded");
        fixture.delete_remote_branch("#333-work");
        fixture.delete_remote_branch("chore/remote-name-deleted");
        fixture.delete_remote_branch("no-ff");

        fixture
    }

    pub(crate) fn git(&self, args: &[&str]) -> String {
        git(&self.work, args)
    }

    /// Create a local branch at HEAD.
    pub(crate) fn branch(&self, name: &str) {
        self.git(&["branch", name]);
    }

    /// Add a commit on `branch`, then return to `master`.
    pub(crate) fn commit_on(&self, branch: &str, file: &str) {
        self.git(&["checkout", branch]);
        std::fs::write(self.work.join(file), format!("{}\n", file)).unwrap();
        self.git(&["add", file]);
        self.git(&["commit", "-m", &format!("Add {}", file)]);
        self.git(&["checkout", "master"]);
    }

    /// Push a branch under the same name and track it.
    pub(crate) fn push(&self, name: &str) {
        self.git(&["push", "-u", "origin", name]);
    }

    /// Push a branch under a different remote name and track it.
    pub(crate) fn push_as(&self, local: &str, remote: &str) {
        self.git(&["push", "-u", "origin", &format!("{}:{}", local, remote)]);
    }

    /// Delete a branch on the remote from the working repo.
    ///
    /// The local remote-tracking ref goes away too, so no drift remains.
    pub(crate) fn delete_remote_branch(&self, name: &str) {
        self.git(&["push", "origin", &format!(":{}", name)]);
    }

    /// Delete a branch directly in the bare repo, as another clone would.
    ///
    /// The working repo keeps its now-stale `origin/<name>` tracking ref.
    pub(crate) fn delete_remote_branch_elsewhere(&self, name: &str) {
        git(&self.bare, &["branch", "-D", name]);
    }

    /// Point `remote` at a path that doesn't exist.
    pub(crate) fn add_unreachable_remote(&self, remote: &str) {
        let missing = self.bare.with_file_name("missing.git");
        let missing = missing.to_string_lossy().to_string();
        self.git(&["remote", "add", remote, &missing]);
    }

    /// Create a lightweight tag at HEAD.
    pub(crate) fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }

    pub(crate) fn local_branches(&self) -> Vec<String> {
        self.git(&["for-each-ref", "--format=%(refname:lstrip=2)", "refs/heads"])
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn init_work_repo(path: &Path) {
    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/master"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
}

fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

use crate::command::run_status;
use crate::error::ForgeError;
use std::path::Path;
use std::process::Command;

/// Environment variable git reads for the committer timestamp.
pub const COMMITTER_DATE_ENV: &str = "GIT_COMMITTER_DATE";

/// The version-control operations a session needs.
///
/// Every operation takes the directory it runs in explicitly; nothing here
/// depends on the process working directory. This keeps the commit loop and
/// the clone step testable with a recording implementation.
pub trait VersionControl {
    /// Clone `url` into a new directory below `workspace`.
    fn clone_repo(&mut self, workspace: &Path, url: &str) -> Result<(), ForgeError>;

    /// Stage `path` (relative to `repo`).
    fn add(&mut self, repo: &Path, path: &str) -> Result<(), ForgeError>;

    /// Create a commit whose author and committer dates are both `timestamp`.
    ///
    /// `timestamp` is passed through verbatim (e.g. `"2024-01-01 12:00:00"`),
    /// so git interprets it in the host's local timezone. Commits are created
    /// even when the index has no changes.
    fn commit_as_of(&mut self, repo: &Path, message: &str, timestamp: &str)
    -> Result<(), ForgeError>;

    /// Push `branch` to `remote`.
    fn push(&mut self, repo: &Path, remote: &str, branch: &str) -> Result<(), ForgeError>;
}

/// [`VersionControl`] backed by the `git` binary on `PATH`.
pub struct Git;

impl Git {
    fn command(dir: &Path) -> Command {
        let mut cmd = Command::new("git");
        cmd.current_dir(dir);
        cmd
    }
}

/// Builds `git commit --date <timestamp> -m <message> --allow-empty` with the
/// committer date forced through the child's environment.
///
/// # Examples
///
/// ```ignore
/// let cmd = commit_command(Path::new("repo"), "Commit for 2024-01-01", "2024-01-01 12:00:00");
/// ```
pub(crate) fn commit_command(repo: &Path, message: &str, timestamp: &str) -> Command {
    let mut cmd = Git::command(repo);
    cmd.arg("commit")
        .arg("--date")
        .arg(timestamp)
        .arg("-m")
        .arg(message)
        .arg("--allow-empty");
    cmd.env(COMMITTER_DATE_ENV, timestamp);
    cmd
}

impl VersionControl for Git {
    fn clone_repo(&mut self, workspace: &Path, url: &str) -> Result<(), ForgeError> {
        let mut cmd = Git::command(workspace);
        cmd.arg("clone").arg(url);
        run_status(cmd)
    }

    fn add(&mut self, repo: &Path, path: &str) -> Result<(), ForgeError> {
        let mut cmd = Git::command(repo);
        cmd.arg("add").arg(path);
        run_status(cmd)
    }

    fn commit_as_of(
        &mut self,
        repo: &Path,
        message: &str,
        timestamp: &str,
    ) -> Result<(), ForgeError> {
        run_status(commit_command(repo, message, timestamp))
    }

    fn push(&mut self, repo: &Path, remote: &str, branch: &str) -> Result<(), ForgeError> {
        let mut cmd = Git::command(repo);
        cmd.arg("push").arg(remote).arg(branch);
        run_status(cmd)
    }
}

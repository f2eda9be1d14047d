use crate::error::ForgeError;
use crate::gh::HostingCli;
use crate::git::VersionControl;
use crate::prompt::{self, StringPrompter};

use console::style;
use std::fs;
use std::path::{Path, PathBuf};

/// Base URL repositories are cloned from.
pub const HOST_URL: &str = "https://github.com";

/// Builds the HTTPS clone URL for `repo`.
///
/// A ref that already carries an owner (`owner/name`) is used as-is; a bare
/// name is qualified with `login`.
///
/// ```ignore
/// assert_eq!(clone_url("graph", "octocat"), "https://github.com/octocat/graph.git");
/// assert_eq!(clone_url("acme/graph", "octocat"), "https://github.com/acme/graph.git");
/// ```
pub fn clone_url(repo: &str, login: &str) -> String {
    let repo = repo.trim_matches('/');
    if repo.contains('/') {
        format!("{}/{}.git", HOST_URL, repo)
    } else {
        format!("{}/{}/{}.git", HOST_URL, login, repo)
    }
}

/// Name of the directory `git clone` creates for `repo`: its last path segment.
pub fn local_dir_name(repo: &str) -> &str {
    let repo = repo.trim_end_matches('/');
    repo.rsplit('/').next().unwrap_or(repo)
}

/// What to do with a clone directory that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Reuse,
    Overwrite,
}

/// Parses the collision menu answer: `1` reuses, `2` overwrites.
pub fn parse_collision(input: &str) -> Option<Collision> {
    match input.trim() {
        "1" => Some(Collision::Reuse),
        "2" => Some(Collision::Overwrite),
        _ => None,
    }
}

/// Ensures a local clone of `repo` exists below `workspace` and returns its path.
///
/// If the directory is already present the user chooses between reusing it
/// untouched (no clone) and deleting it before cloning again.
///
/// # Errors
///
/// Propagates failures of the login lookup, directory removal and
/// `git clone`.
pub fn materialize<P, V, H>(
    prompter: &mut P,
    vcs: &mut V,
    hosting: &mut H,
    workspace: &Path,
    repo: &str,
) -> Result<PathBuf, ForgeError>
where
    P: StringPrompter,
    V: VersionControl,
    H: HostingCli,
{
    let login = hosting.current_login()?;
    let url = clone_url(repo, &login);
    let dir = workspace.join(local_dir_name(repo));

    if dir.exists() {
        println!(
            "{}",
            style(format!("Directory '{}' already exists.", dir.display())).yellow()
        );
        loop {
            let answer = prompt::ask(
                prompter,
                "Do you want to (1) use the existing directory or (2) overwrite it? Enter your choice (1/2)",
            )?;
            match parse_collision(&answer) {
                Some(Collision::Reuse) => {
                    println!("Using the existing directory: {}", dir.display());
                    return Ok(dir);
                }
                Some(Collision::Overwrite) => {
                    println!("Overwriting the directory: {}", dir.display());
                    fs::remove_dir_all(&dir)?;
                    break;
                }
                None => {
                    println!("{}", style("Invalid choice. Please enter 1 or 2.").yellow());
                }
            }
        }
    }

    println!("Cloning repository: {}", style(&url).cyan());
    vcs.clone_repo(workspace, &url)?;
    Ok(dir)
}

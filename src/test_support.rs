//! Scripted stand-ins for the terminal, `git` and `gh`.

use crate::error::ForgeError;
use crate::gh::HostingCli;
use crate::git::VersionControl;
use crate::prompt::StringPrompter;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// Answers prompts from a fixed script; once the script is exhausted every
/// prompt behaves like Ctrl+C.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedPrompter {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl StringPrompter for ScriptedPrompter {
    fn prompt(&mut self, prompt: &str) -> Result<String, ForgeError> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(ForgeError::Interrupted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GitCall {
    Clone { workspace: PathBuf, url: String },
    Add { repo: PathBuf, path: String },
    Commit {
        repo: PathBuf,
        message: String,
        timestamp: String,
        marker: String,
    },
    Push { repo: PathBuf, remote: String, branch: String },
}

/// Records every call. `clone_repo` creates the target directory and notes
/// whether it already existed at that moment; `commit_as_of` snapshots the
/// most recently staged file so tests can check what each commit would
/// contain.
#[derive(Default)]
pub struct RecordingGit {
    pub calls: Vec<GitCall>,
    pub clone_target_existed: Vec<bool>,
    pub fail_clone: bool,
    pub fail_push: bool,
    pub(crate) last_added: Option<String>,
}

impl RecordingGit {
    pub fn commits(&self) -> Vec<&GitCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, GitCall::Commit { .. }))
            .collect()
    }

    pub fn clones(&self) -> Vec<&GitCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, GitCall::Clone { .. }))
            .collect()
    }

    pub fn pushes(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, GitCall::Push { .. }))
            .count()
    }
}

impl VersionControl for RecordingGit {
    fn clone_repo(&mut self, workspace: &Path, url: &str) -> Result<(), ForgeError> {
        let name = url
            .rsplit('/')
            .next()
            .unwrap_or(url)
            .trim_end_matches(".git");
        let target = workspace.join(name);
        self.clone_target_existed.push(target.exists());
        self.calls.push(GitCall::Clone {
            workspace: workspace.to_path_buf(),
            url: url.to_string(),
        });
        if self.fail_clone {
            return Err(ForgeError::CommandFailed {
                command: format!("git clone {}", url),
                detail: String::from("exit status 128"),
            });
        }
        fs::create_dir_all(&target)?;
        Ok(())
    }

    fn add(&mut self, repo: &Path, path: &str) -> Result<(), ForgeError> {
        self.last_added = Some(path.to_string());
        self.calls.push(GitCall::Add {
            repo: repo.to_path_buf(),
            path: path.to_string(),
        });
        Ok(())
    }

    fn commit_as_of(
        &mut self,
        repo: &Path,
        message: &str,
        timestamp: &str,
    ) -> Result<(), ForgeError> {
        let marker = match &self.last_added {
            Some(path) => fs::read_to_string(repo.join(path)).unwrap_or_default(),
            None => String::new(),
        };
        self.calls.push(GitCall::Commit {
            repo: repo.to_path_buf(),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
            marker,
        });
        Ok(())
    }

    fn push(&mut self, repo: &Path, remote: &str, branch: &str) -> Result<(), ForgeError> {
        self.calls.push(GitCall::Push {
            repo: repo.to_path_buf(),
            remote: remote.to_string(),
            branch: branch.to_string(),
        });
        if self.fail_push {
            return Err(ForgeError::CommandFailed {
                command: format!("git push {} {}", remote, branch),
                detail: String::from("exit status 1"),
            });
        }
        Ok(())
    }
}

/// Fixed `gh` answers plus a record of created repositories.
pub struct FakeGh {
    pub login: String,
    pub listing: String,
    pub created: Vec<String>,
    pub list_calls: Vec<u32>,
}

impl FakeGh {
    pub fn new(login: &str, listing: &str) -> Self {
        FakeGh {
            login: login.to_string(),
            listing: listing.to_string(),
            created: Vec::new(),
            list_calls: Vec::new(),
        }
    }
}

impl HostingCli for FakeGh {
    fn create_private_repo(&mut self, name: &str) -> Result<(), ForgeError> {
        self.created.push(name.to_string());
        Ok(())
    }

    fn list_repos(&mut self, limit: u32) -> Result<String, ForgeError> {
        self.list_calls.push(limit);
        Ok(self.listing.clone())
    }

    fn current_login(&mut self) -> Result<String, ForgeError> {
        Ok(self.login.clone())
    }
}

use crate::command::{run_output, run_status};
use crate::error::ForgeError;
use std::process::Command;

/// The hosting-provider queries and mutations a session needs.
pub trait HostingCli {
    /// Create a private repository named `name` without interactive
    /// confirmation.
    fn create_private_repo(&mut self, name: &str) -> Result<(), ForgeError>;

    /// Raw listing of up to `limit` repositories owned by the authenticated
    /// user, one repository per line.
    fn list_repos(&mut self, limit: u32) -> Result<String, ForgeError>;

    /// Login name of the authenticated user.
    fn current_login(&mut self) -> Result<String, ForgeError>;
}

/// [`HostingCli`] backed by the GitHub CLI (`gh`).
pub struct Gh;

impl HostingCli for Gh {
    fn create_private_repo(&mut self, name: &str) -> Result<(), ForgeError> {
        let mut cmd = Command::new("gh");
        cmd.args(["repo", "create", name, "--private", "--confirm"]);
        run_status(cmd)
    }

    fn list_repos(&mut self, limit: u32) -> Result<String, ForgeError> {
        let mut cmd = Command::new("gh");
        cmd.args(["repo", "list", "--limit"]).arg(limit.to_string());
        run_output(cmd)
    }

    fn current_login(&mut self) -> Result<String, ForgeError> {
        let mut cmd = Command::new("gh");
        cmd.args(["api", "user", "--jq", ".login"]);
        let login = run_output(cmd)?;
        if login.is_empty() {
            return Err(ForgeError::CommandFailed {
                command: String::from("gh api user --jq .login"),
                detail: String::from("no login returned; is `gh auth login` done?"),
            });
        }
        Ok(login)
    }
}

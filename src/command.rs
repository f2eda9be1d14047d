use crate::error::ForgeError;
use std::io::ErrorKind;
use std::process::{Command, Stdio};

/// Renders a command as the user would type it, for error messages.
///
/// Arguments containing spaces are wrapped in double quotes.
///
/// ```ignore
/// let mut cmd = Command::new("git");
/// cmd.args(["commit", "-m", "Commit for 2024-01-01"]);
/// assert_eq!(display(&cmd), "git commit -m \"Commit for 2024-01-01\"");
/// ```
pub(crate) fn display(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().to_string()];
    for arg in cmd.get_args() {
        let a = arg.to_string_lossy();
        if a.contains(' ') {
            parts.push(format!("\"{}\"", a));
        } else {
            parts.push(a.to_string());
        }
    }
    parts.join(" ")
}

fn spawn_error(cmd: &Command, e: std::io::Error) -> ForgeError {
    let command = display(cmd);
    if e.kind() == ErrorKind::NotFound {
        ForgeError::MissingDependency {
            tool: cmd.get_program().to_string_lossy().to_string(),
        }
    } else {
        ForgeError::Spawn { command, source: e }
    }
}

/// Runs a command with inherited stdio and checks only its exit status.
///
/// The external tool's own progress output goes straight to the terminal.
///
/// # Errors
///
/// * [`ForgeError::MissingDependency`] if the binary is not found.
/// * [`ForgeError::Spawn`] for any other spawn failure.
/// * [`ForgeError::CommandFailed`] on a non-zero exit.
pub(crate) fn run_status(mut cmd: Command) -> Result<(), ForgeError> {
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    let status = cmd.status().map_err(|e| spawn_error(&cmd, e))?;
    if status.success() {
        Ok(())
    } else {
        Err(ForgeError::CommandFailed {
            command: display(&cmd),
            detail: match status.code() {
                Some(code) => format!("exit status {}", code),
                None => String::from("terminated by signal"),
            },
        })
    }
}

/// Runs a command and returns its trimmed stdout on success.
///
/// On a non-zero exit the trimmed stderr becomes the error detail.
pub(crate) fn run_output(mut cmd: Command) -> Result<String, ForgeError> {
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let out = cmd.output().map_err(|e| spawn_error(&cmd, e))?;
    if out.status.success() {
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
        Err(ForgeError::CommandFailed {
            command: display(&cmd),
            detail: if stderr.is_empty() {
                String::from("non-zero exit")
            } else {
                stderr
            },
        })
    }
}

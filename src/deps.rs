use crate::command::run_output;
use crate::error::ForgeError;
use std::process::Command;

/// An external binary the tool shells out to.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    /// Executable name looked up on `PATH`.
    pub binary: &'static str,
    /// Name shown to the user when the tool is missing.
    pub display_name: &'static str,
}

/// Tools checked before every session iteration, in order.
pub const REQUIRED_TOOLS: [Tool; 2] = [
    Tool {
        binary: "gh",
        display_name: "GitHub CLI (gh)",
    },
    Tool {
        binary: "git",
        display_name: "Git",
    },
];

/// Verifies that `tool` can be located and answers `--version`.
///
/// # Errors
///
/// * [`ForgeError::MissingDependency`] if the binary is not on `PATH`.
/// * [`ForgeError::CommandFailed`] if `--version` exits non-zero.
pub fn check_tool(tool: &Tool) -> Result<(), ForgeError> {
    let missing = || ForgeError::MissingDependency {
        tool: tool.display_name.to_string(),
    };

    which::which(tool.binary).map_err(|_| missing())?;

    let mut cmd = Command::new(tool.binary);
    cmd.arg("--version");
    match run_output(cmd) {
        Ok(_) => Ok(()),
        Err(ForgeError::MissingDependency { .. }) => Err(missing()),
        Err(e) => Err(e),
    }
}

/// Checks every entry of [`REQUIRED_TOOLS`], stopping at the first failure.
pub fn check_dependencies() -> Result<(), ForgeError> {
    for tool in REQUIRED_TOOLS.iter() {
        check_tool(tool)?;
    }
    Ok(())
}

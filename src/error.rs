//! Error type shared by every stage of a session.

use thiserror::Error;

/// Errors that can end a session iteration.
#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("{tool} is not installed. Please install it first.")]
    MissingDependency { tool: String },

    #[error("`{command}` failed: {detail}")]
    CommandFailed { command: String, detail: String },

    #[error("could not start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid date '{input}' (expected YYYY-MM-DD): {source}")]
    DateParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Ctrl+C at a prompt, or the user typed `quit`.
    #[error("interrupted by user")]
    Interrupted,
}

impl ForgeError {
    /// True for errors that should end the whole process rather than return
    /// to the main menu. Asking again cannot fix any of these.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ForgeError::MissingDependency { .. }
                | ForgeError::Interrupted
                | ForgeError::Prompt(_)
        )
    }
}

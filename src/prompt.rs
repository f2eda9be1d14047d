use crate::error::ForgeError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::io::ErrorKind;

/// Word that ends the session from any prompt.
pub const QUIT_WORD: &str = "quit";

/// Abstraction over a single-line text prompt.
///
/// Implementors define how a line of input is collected from the user.
/// Sessions depend on this trait rather than the terminal so that menu
/// flows can be driven by scripted input in tests.
pub trait StringPrompter {
    /// Prompt the user for one line of input. Empty input is allowed.
    ///
    /// # Returns
    /// `Ok(String)` with the raw input, [`ForgeError::Interrupted`] if the
    /// user pressed Ctrl+C, or [`ForgeError::Prompt`] for other failures.
    fn prompt(&mut self, prompt: &str) -> Result<String, ForgeError>;
}

/// Default implementation of `StringPrompter` using `dialoguer::Input`.
///
/// Uses the `ColorfulTheme` for user-friendly styling.
pub struct DialoguerStringPrompter;

impl StringPrompter for DialoguerStringPrompter {
    fn prompt(&mut self, prompt: &str) -> Result<String, ForgeError> {
        let theme = ColorfulTheme::default();
        let input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true);
        match input.interact_text() {
            Ok(v) => Ok(v),
            Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => {
                Err(ForgeError::Interrupted)
            }
            Err(e) => Err(ForgeError::Prompt(e.to_string())),
        }
    }
}

/// Prompt for a line of input and return it trimmed.
///
/// Typing [`QUIT_WORD`] (any case) is reported as
/// [`ForgeError::Interrupted`], the same as Ctrl+C.
pub fn ask<P: StringPrompter>(prompter: &mut P, prompt: &str) -> Result<String, ForgeError> {
    let raw = prompter.prompt(prompt)?;
    let answer = raw.trim();
    if answer.eq_ignore_ascii_case(QUIT_WORD) {
        return Err(ForgeError::Interrupted);
    }
    Ok(answer.to_string())
}

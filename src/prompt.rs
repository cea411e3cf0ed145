//! User interaction handling.
//! The writer only talks to the operator through [`Prompter`], so tests can
//! script the answers.

use dialoguer::{console::Term, Confirm};

use crate::error::Result;

/// Asks the operator yes/no questions.
pub trait Prompter {
    /// Asks `prompt` and returns the operator's answer.
    ///
    /// # Arguments
    /// * `prompt` - Question displayed to the operator
    /// * `default` - Answer used when the operator just presses enter
    fn confirm(&self, prompt: String, default: bool) -> Result<bool>;

    /// Whether questions can be asked at all.
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Interactive prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: String, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }

    /// Dialoguer draws its prompts on stderr.
    fn is_interactive(&self) -> bool {
        Term::stderr().is_term()
    }
}

//! Interactive collaborator used by the credential prompt and the
//! confirmation flow.

use crate::error::InteractionError;

/// The user's answer to the generated-message dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// "Use this": take the generated text unchanged.
    UseAsIs,
    /// "Edit": open an edit field pre-filled with the generated text.
    Edit,
    /// The dialog was closed without picking either option.
    Dismissed,
}

/// Trait for the interactive surface.
///
/// This abstraction allows scripting user answers in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Interaction: Send + Sync {
    /// Ask for a secret with masked input. `None` means cancelled or empty.
    fn prompt_secret(&self, prompt: &str) -> Result<Option<String>, InteractionError>;

    /// Show the generated message and ask what to do with it.
    fn choose(&self, message: &str) -> Result<Choice, InteractionError>;

    /// Let the user edit `initial`. `None` means the edit was cancelled.
    fn edit(&self, initial: &str) -> Result<Option<String>, InteractionError>;
}

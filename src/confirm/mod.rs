//! User confirmation of the generated commit message.

pub mod interaction;
pub mod terminal;

use tracing::debug;

use crate::error::InteractionError;

pub use interaction::{Choice, Interaction};
pub use terminal::TerminalInteraction;

/// Offer the generated message to the user.
///
/// Returns the text to write (the generated message or the user's edit), or
/// `None` when the dialog was dismissed or the edit was cancelled. Neither
/// case is an error.
pub fn confirm_message<I: Interaction + ?Sized>(
    interaction: &I,
    generated: &str,
) -> Result<Option<String>, InteractionError> {
    match interaction.choose(generated)? {
        Choice::UseAsIs => Ok(Some(generated.to_string())),
        Choice::Edit => {
            let edited = interaction.edit(generated)?;
            if edited.is_none() {
                debug!("Edit cancelled, leaving commit message untouched");
            }
            Ok(edited.filter(|text| !text.is_empty()))
        }
        Choice::Dismissed => {
            debug!("Generated message dismissed");
            Ok(None)
        }
    }
}

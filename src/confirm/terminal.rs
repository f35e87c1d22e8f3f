//! Terminal prompts via dialoguer.

use dialoguer::{Editor, Input, Password, Select};

use crate::error::InteractionError;

use super::interaction::{Choice, Interaction};

/// Labels shown on the generated-message dialog, in display order.
pub const CHOICE_LABELS: [&str; 2] = ["Use this", "Edit"];

/// Title line of the generated-message dialog.
pub const CHOICE_TITLE: &str = "Generated commit message:";

/// Prompt shown above the edit field.
pub const EDIT_PROMPT: &str = "Edit your commit message";

/// Interaction backed by the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalInteraction;

impl Interaction for TerminalInteraction {
    fn prompt_secret(&self, prompt: &str) -> Result<Option<String>, InteractionError> {
        let value = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(InteractionError::Terminal)?;

        Ok(non_empty(value))
    }

    fn choose(&self, message: &str) -> Result<Choice, InteractionError> {
        eprintln!("{}\n\n{}\n", CHOICE_TITLE, message);

        // Esc / q closes the menu without a selection
        let selection = Select::new()
            .items(&CHOICE_LABELS)
            .default(0)
            .interact_opt()
            .map_err(InteractionError::Terminal)?;

        Ok(choice_from_index(selection))
    }

    fn edit(&self, initial: &str) -> Result<Option<String>, InteractionError> {
        match edit_mode(initial) {
            EditMode::SingleLine(prefill) => {
                let value: String = Input::new()
                    .with_prompt(EDIT_PROMPT)
                    .with_initial_text(prefill)
                    .allow_empty(true)
                    .interact_text()
                    .map_err(InteractionError::Terminal)?;

                Ok(non_empty(value))
            }
            EditMode::MultiLine(prefill) => {
                eprintln!("{EDIT_PROMPT}");
                // None when the editor is closed without saving
                let value = Editor::new()
                    .edit(prefill)
                    .map_err(|e| InteractionError::Terminal(e.into()))?;

                Ok(value.and_then(|text| non_empty(text.trim_end().to_string())))
            }
        }
    }
}

/// How the edit field is presented for a given suggestion.
#[derive(Debug, PartialEq, Eq)]
enum EditMode<'a> {
    /// One-line input field.
    SingleLine(&'a str),
    /// External editor, for text that spans several lines.
    MultiLine(&'a str),
}

/// Pick the edit field for `initial`. Surrounding blank lines are dropped
/// from the pre-filled text so they never land in a one-line field.
fn edit_mode(initial: &str) -> EditMode<'_> {
    let prefill = initial.trim();
    if prefill.contains('\n') {
        EditMode::MultiLine(prefill)
    } else {
        EditMode::SingleLine(prefill)
    }
}

/// Map a `Select` result onto a [`Choice`].
fn choice_from_index(selection: Option<usize>) -> Choice {
    match selection {
        Some(0) => Choice::UseAsIs,
        Some(1) => Choice::Edit,
        _ => Choice::Dismissed,
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

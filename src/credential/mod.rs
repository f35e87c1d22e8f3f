//! API key resolution: persisted state first, interactive prompt second.

pub mod store;

use tracing::debug;

use crate::confirm::Interaction;
use crate::error::CredentialError;

pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};

/// Key under which the API key is persisted.
pub const API_KEY_STATE_KEY: &str = "openaiApiKey";

/// Prompt shown when no API key has been stored yet.
pub const API_KEY_PROMPT: &str = "Enter your openrouter.ai API key";

/// Resolve the API key.
///
/// A previously stored key is returned as-is, without prompting and without
/// checking that it still works. Otherwise the user is asked for one with
/// masked input; a non-empty answer is persisted before it is returned.
/// An empty or cancelled prompt yields `None` and leaves the store untouched.
pub fn resolve_credential<S, I>(
    store: &S,
    interaction: &I,
) -> Result<Option<String>, CredentialError>
where
    S: CredentialStore + ?Sized,
    I: Interaction + ?Sized,
{
    if let Some(stored) = store.get(API_KEY_STATE_KEY)?.filter(|k| !k.is_empty()) {
        debug!("Using stored API key");
        return Ok(Some(stored));
    }

    let entered = interaction
        .prompt_secret(API_KEY_PROMPT)
        .map_err(CredentialError::Prompt)?;

    match entered {
        Some(key) if !key.is_empty() => {
            store.set(API_KEY_STATE_KEY, &key)?;
            debug!("Stored new API key");
            Ok(Some(key))
        }
        _ => Ok(None),
    }
}

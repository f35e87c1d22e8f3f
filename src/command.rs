//! The generate-message command: credential → diff → generation →
//! confirmation → write.

use std::path::PathBuf;

use tracing::debug;

use crate::confirm::{Interaction, confirm_message};
use crate::credential::{CredentialStore, resolve_credential};
use crate::error::CommandError;
use crate::host::{CommitMessageHost, WriteOutcome, write_commit_message};
use crate::llm::MessageGenerator;
use crate::workspace::{GitTool, collect_diff};

/// External collaborators the command runs against.
pub struct Collaborators<'a> {
    pub store: &'a dyn CredentialStore,
    pub interaction: &'a dyn Interaction,
    pub git: &'a dyn GitTool,
    pub generator: &'a dyn MessageGenerator,
    pub host: &'a dyn CommitMessageHost,
}

/// How a completed run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The message was written into the repository's commit-message field.
    Written { message: String, git_dir: PathBuf },
    /// The user dismissed the dialog or cancelled the edit.
    Dismissed,
    /// The user confirmed, but no repository was available to write into.
    HostUnavailable { message: String },
}

/// Run the command once.
///
/// `workspace` is `None` when no workspace root could be determined. Every
/// failure is terminal for this run and nothing is retried.
pub async fn generate_commit_message(
    deps: &Collaborators<'_>,
    workspace: Option<PathBuf>,
) -> Result<Outcome, CommandError> {
    let api_key =
        resolve_credential(deps.store, deps.interaction)?.ok_or(CommandError::MissingCredential)?;

    let root = workspace.ok_or(CommandError::NoWorkspace)?;

    eprintln!("Staging changes in {}...", root.display());
    let diff = collect_diff(deps.git, &root).await?;

    eprintln!("Generating commit message...");
    let generated = deps.generator.generate(&diff, &api_key).await?;
    debug!("Generated message: {} bytes", generated.len());

    let Some(message) = confirm_message(deps.interaction, &generated)? else {
        return Ok(Outcome::Dismissed);
    };

    match write_commit_message(deps.host, &message)? {
        WriteOutcome::Written(repo) => Ok(Outcome::Written {
            message,
            git_dir: repo.git_dir,
        }),
        WriteOutcome::Skipped => Ok(Outcome::HostUnavailable { message }),
    }
}

//! Writing the final message into the commit-message field.

pub mod git;

use std::path::PathBuf;

use tracing::debug;

use crate::error::HostError;

pub use git::{GitHost, MERGE_MESSAGE_FILE, PENDING_MESSAGE_FILE, pending_message_path};

/// A repository known to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoHandle {
    /// Working tree root.
    pub root: PathBuf,
    /// The repository's git directory.
    pub git_dir: PathBuf,
}

/// Trait for the host's version-control integration.
///
/// Only the two operations the writer needs are exposed.
#[cfg_attr(test, mockall::automock)]
pub trait CommitMessageHost: Send + Sync {
    /// Known repositories, primary first. Empty when the integration is unavailable.
    fn list_repositories(&self) -> Vec<RepoHandle>;

    /// Overwrite the commit message of `repo`.
    fn set_commit_message(&self, repo: &RepoHandle, message: &str) -> Result<(), HostError>;
}

/// Result of [`write_commit_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The message was written into this repository.
    Written(RepoHandle),
    /// No repository was available; nothing was written.
    Skipped,
}

/// Write `message` into the commit-message field of the first repository.
///
/// Other repositories are left alone. With no repository available the write
/// is skipped silently.
pub fn write_commit_message<H: CommitMessageHost + ?Sized>(
    host: &H,
    message: &str,
) -> Result<WriteOutcome, HostError> {
    let Some(repo) = host.list_repositories().into_iter().next() else {
        debug!("No repository available, skipping commit message write");
        return Ok(WriteOutcome::Skipped);
    };

    host.set_commit_message(&repo, message)?;
    Ok(WriteOutcome::Written(repo))
}

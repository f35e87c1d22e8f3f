//! Commit message field backed by git repositories on disk.

use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::{debug, warn};

use crate::error::HostError;

use super::{CommitMessageHost, RepoHandle};

/// File in the git directory that pre-fills the next `git commit`.
///
/// git reads it when no `-m`/`-F` is given and deletes it once the commit
/// has been created.
pub const PENDING_MESSAGE_FILE: &str = "SQUASH_MSG";

/// Message of an in-progress merge. git puts `SQUASH_MSG` in front of it, so
/// during a merge this file is the one to replace.
pub const MERGE_MESSAGE_FILE: &str = "MERGE_MSG";

/// Marker of an in-progress merge.
const MERGE_HEAD_FILE: &str = "MERGE_HEAD";

/// Message file the next `git commit` in `git_dir` will read.
pub fn pending_message_path(git_dir: &Path) -> PathBuf {
    let merging =
        git_dir.join(MERGE_HEAD_FILE).exists() || git_dir.join(MERGE_MESSAGE_FILE).exists();
    if merging {
        git_dir.join(MERGE_MESSAGE_FILE)
    } else {
        git_dir.join(PENDING_MESSAGE_FILE)
    }
}

/// Repositories reachable from a workspace: the one containing the
/// workspace root, then its submodules in declaration order.
#[derive(Debug, Clone)]
pub struct GitHost {
    workspace: PathBuf,
}

impl GitHost {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    /// Path of the pending commit message for a repository.
    pub fn message_path(repo: &RepoHandle) -> PathBuf {
        pending_message_path(&repo.git_dir)
    }
}

fn handle_for(repo: &Repository) -> RepoHandle {
    let git_dir = repo.path().to_path_buf();
    let root = repo
        .workdir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| git_dir.clone());
    RepoHandle { root, git_dir }
}

impl CommitMessageHost for GitHost {
    fn list_repositories(&self) -> Vec<RepoHandle> {
        let repo = match Repository::discover(&self.workspace) {
            Ok(repo) => repo,
            Err(e) => {
                debug!(workspace = %self.workspace.display(), "No repository found: {e}");
                return Vec::new();
            }
        };

        let mut handles = vec![handle_for(&repo)];

        match repo.submodules() {
            Ok(submodules) => {
                for submodule in submodules {
                    // Uninitialized submodules have no repository to write into
                    match submodule.open() {
                        Ok(sub_repo) => handles.push(handle_for(&sub_repo)),
                        Err(e) => debug!(
                            name = submodule.name().unwrap_or("<non-utf8>"),
                            "Skipping submodule: {e}"
                        ),
                    }
                }
            }
            Err(e) => warn!("Failed to list submodules: {e}"),
        }

        handles
    }

    fn set_commit_message(&self, repo: &RepoHandle, message: &str) -> Result<(), HostError> {
        let path = Self::message_path(repo);
        let mut content = message.to_string();
        if !content.ends_with('\n') {
            content.push('\n');
        }

        fs::write(&path, content).map_err(|source| HostError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "Wrote pending commit message");
        Ok(())
    }
}

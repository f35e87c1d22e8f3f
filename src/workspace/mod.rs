//! Workspace resolution and staged-diff collection.

pub mod git;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CommandError, ToolError};

pub use git::{GitCli, GitTool};

/// Resolve the workspace root: the explicit path if given, otherwise the
/// current directory.
///
/// Fails with [`CommandError::NoWorkspace`] when the directory cannot be
/// determined or does not exist.
pub fn resolve_workspace(explicit: Option<&Path>) -> Result<PathBuf, CommandError> {
    let root = match explicit {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().map_err(|_| CommandError::NoWorkspace)?,
    };

    if !root.is_dir() {
        debug!(path = %root.display(), "Workspace is not a directory");
        return Err(CommandError::NoWorkspace);
    }

    Ok(root)
}

/// Stage everything in `root` and return the staged diff.
///
/// The diff step only runs once staging has succeeded; either failure aborts
/// with no partial result. The diff is returned untruncated.
pub async fn collect_diff<G: GitTool + ?Sized>(git: &G, root: &Path) -> Result<String, ToolError> {
    git.stage_all(root).await?;
    let diff = git.diff_staged(root).await?;

    if diff.trim().is_empty() {
        warn!("Staged diff is empty; nothing meaningful to describe");
    } else {
        debug!("Staged diff: {} chars", diff.len());
    }

    Ok(diff)
}

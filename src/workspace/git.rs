//! `git` binary invocations for staging and diffing.
//!
//! Shells out to the system `git` so the user's own config, hooks and
//! `.gitignore` rules apply.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::ToolError;

/// Trait for the version-control operations the command needs.
///
/// This abstraction allows mocking the `git` subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitTool: Send + Sync {
    /// Stage every pending change under `root` (`git add .`).
    async fn stage_all(&self, root: &Path) -> Result<(), ToolError>;

    /// Return the diff of the staged index (`git diff --cached`).
    async fn diff_staged(&self, root: &Path) -> Result<String, ToolError>;
}

/// The real `git` command-line tool.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
        }
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a different executable in place of `git`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run one git subcommand in `root` and return its stdout.
    async fn run(
        &self,
        root: &Path,
        args: &[&str],
        operation: &'static str,
    ) -> Result<String, ToolError> {
        // Use `which` crate for cross-platform executable detection
        if which::which(&self.program).is_err() {
            return Err(ToolError::NotInstalled);
        }

        debug!(cwd = %root.display(), ?args, "Running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ToolError::SpawnFailed { operation, source })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ToolError::NonZeroExit {
                operation,
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl GitTool for GitCli {
    async fn stage_all(&self, root: &Path) -> Result<(), ToolError> {
        self.run(root, &["add", "."], "add").await.map(|_| ())
    }

    async fn diff_staged(&self, root: &Path) -> Result<String, ToolError> {
        self.run(root, &["diff", "--cached"], "diff").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_not_installed() {
        let git = GitCli::with_program("nonexistent_git_binary_12345");
        let dir = tempfile::tempdir().unwrap();

        let result = git.stage_all(dir.path()).await;
        assert!(matches!(result, Err(ToolError::NotInstalled)));
    }

    #[tokio::test]
    async fn test_stage_all_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();

        let result = GitCli::new().stage_all(dir.path()).await;
        match result {
            Err(ToolError::NonZeroExit { operation, code, .. }) => {
                assert_eq!(operation, "add");
                assert_ne!(code, Some(0));
            }
            other => panic!("Expected NonZeroExit, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_working_directory_is_spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let result = GitCli::new().diff_staged(&missing).await;
        assert!(matches!(result, Err(ToolError::SpawnFailed { operation: "diff", .. })));
    }

    /// Stand-in binary: `false` accepts any args and exits 1.
    #[tokio::test]
    #[cfg(unix)]
    async fn test_non_zero_exit_is_reported_with_code() {
        let dir = tempfile::tempdir().unwrap();
        let result = GitCli::with_program("false").diff_staged(dir.path()).await;

        match result {
            Err(ToolError::NonZeroExit { code, .. }) => assert_eq!(code, Some(1)),
            other => panic!("Expected NonZeroExit, got: {:?}", other),
        }
    }
}

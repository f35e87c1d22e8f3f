//! smart-commit - Generate a git commit message from the staged diff.
//!
//! # Overview
//!
//! smart-commit stages every change in the workspace, sends the staged diff to
//! an OpenRouter-compatible completion endpoint, lets the user accept or edit
//! the suggested message, and leaves it as the pending message of the
//! workspace's repository so the next `git commit` picks it up.

pub mod command;
pub mod confirm;
pub mod credential;
pub mod error;
pub mod host;
pub mod llm;
pub mod workspace;

// Re-export commonly used types
pub use command::{Collaborators, Outcome, generate_commit_message};
pub use confirm::{Choice, Interaction, TerminalInteraction};
pub use credential::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use error::{
    CommandError, CredentialError, GenerationError, HostError, InteractionError, ToolError,
};
pub use host::{CommitMessageHost, GitHost, RepoHandle};
pub use llm::{GeneratorConfig, MessageGenerator, OpenRouterClient};
pub use workspace::{GitCli, GitTool};

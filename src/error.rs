//! Error types for smart-commit modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the persisted credential store.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Could not determine the user config directory for persisted state")]
    NoConfigDir,

    #[error("Failed to read state file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("State file {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write state file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read API key: {0}")]
    Prompt(#[source] InteractionError),
}

/// Errors from the external `git` binary.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("git not found on PATH. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} exited with {}: {stderr}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        operation: &'static str,
        code: Option<i32>,
        stderr: String,
    },
}

/// Errors from the remote completion endpoint.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to completion endpoint failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Completion endpoint returned {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Completion endpoint reported an error: {message}")]
    Api { message: String },

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Errors from interactive terminal prompts.
#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("Terminal prompt failed: {0}")]
    Terminal(#[source] dialoguer::Error),
}

/// Errors from writing the commit message into a repository.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Failed to write commit message to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort the generate-message command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("API key is required to generate commit messages.")]
    MissingCredential,

    #[error("No workspace folder found.")]
    NoWorkspace,

    #[error("Error generating commit message: {0}")]
    ExternalTool(#[from] ToolError),

    #[error("Error generating commit message: {0}")]
    RemoteGeneration(#[from] GenerationError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Interaction(#[from] InteractionError),

    #[error(transparent)]
    Host(#[from] HostError),
}

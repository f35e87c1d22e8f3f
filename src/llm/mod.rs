//! Commit message generation through a remote completion endpoint.

pub mod client;
pub mod prompt;
pub mod response;

pub use client::{MessageGenerator, OpenRouterClient};
pub use prompt::{CompletionRequest, GeneratorConfig, build_commit_prompt};
pub use response::parse_first_candidate;

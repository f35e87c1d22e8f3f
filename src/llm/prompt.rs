//! Completion request construction.

use serde::Serialize;

/// Default completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

/// Upper bound on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 60;

/// Sampling temperature: low variance, not deterministic.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Instruction placed in front of the diff.
pub const PROMPT_PREAMBLE: &str = "Based on the following code changes, generate a concise, real-world commit message. Focus only on significant updates, and avoid mentioning minor changes like whitespace or formatting adjustments. Limit the commit message to a single sentence or a short paragraph that captures the main purpose of the changes: ";

/// Settings for the completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// JSON body sent to the completion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(config: &GeneratorConfig, diff: &str) -> Self {
        Self {
            model: config.model.clone(),
            prompt: build_commit_prompt(diff),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

/// Build the prompt for a staged diff.
///
/// The diff is embedded verbatim. Nothing is truncated, so very large diffs
/// can exceed the endpoint's input limit and come back as a remote error.
pub fn build_commit_prompt(diff: &str) -> String {
    format!("{PROMPT_PREAMBLE}{diff}")
}

//! HTTP client for the completion endpoint.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::error::GenerationError;

use super::prompt::{CompletionRequest, GeneratorConfig};
use super::response::parse_first_candidate;

/// Trait for turning a diff into a commit message.
///
/// This abstraction allows replacing the remote call in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageGenerator: Send + Sync {
    /// Generate a commit message for `diff`, authenticating with `api_key`.
    async fn generate(&self, diff: &str, api_key: &str) -> Result<String, GenerationError>;
}

/// OpenRouter-compatible completion client.
///
/// One request per call: no retries, no request timeout.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    config: GeneratorConfig,
}

impl OpenRouterClient {
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .build()
            .map_err(GenerationError::ClientBuild)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

#[async_trait]
impl MessageGenerator for OpenRouterClient {
    async fn generate(&self, diff: &str, api_key: &str) -> Result<String, GenerationError> {
        let request = CompletionRequest::new(&self.config, diff);

        debug!(
            endpoint = %self.config.endpoint,
            model = %request.model,
            "Completion prompt length: {} bytes",
            request.prompt.len()
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(GenerationError::Network)?;

        let status = response.status();
        let body = response.text().await.map_err(GenerationError::Network)?;

        if !status.is_success() {
            return Err(GenerationError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        parse_first_candidate(&body)
    }
}

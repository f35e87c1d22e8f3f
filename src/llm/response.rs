//! Completion response parsing.

use serde::Deserialize;

use crate::error::GenerationError;

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

/// Extract the text of the first candidate from a response body.
///
/// Later candidates are ignored. The text is returned exactly as sent, with
/// no trimming. A body without a usable first candidate is an error, never
/// an empty default.
pub fn parse_first_candidate(body: &str) -> Result<String, GenerationError> {
    let response: CompletionResponse = serde_json::from_str(body).map_err(|e| {
        GenerationError::MalformedResponse(format!("{}. Response: {}", e, preview(body)))
    })?;

    if let Some(error) = response.error {
        return Err(GenerationError::Api {
            message: error
                .message
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    let choices = response.choices.ok_or_else(|| {
        GenerationError::MalformedResponse("missing `choices` list".to_string())
    })?;

    let first = choices.into_iter().next().ok_or_else(|| {
        GenerationError::MalformedResponse("`choices` list is empty".to_string())
    })?;

    first.text.ok_or_else(|| {
        GenerationError::MalformedResponse("first candidate has no `text`".to_string())
    })
}

/// First 200 characters of a body, for error messages.
fn preview(body: &str) -> String {
    body.chars().take(200).collect()
}

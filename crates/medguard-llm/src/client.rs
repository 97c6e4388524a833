//! Completion service access.
//!
//! The service is treated as stateless request/response: one prompt in,
//! one block of free text out. Calls are blocking; the HTTP layer runs the
//! pipeline on a blocking thread.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ureq::Agent;

use crate::error::LlmError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "llama3";

/// A text-completion backend.
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` and return the trimmed response text.
    ///
    /// Returns an empty string when the service answers without text.
    fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Client for an Ollama-compatible `/api/generate` endpoint, non-streaming.
#[derive(Clone)]
pub struct OllamaClient {
    agent: Agent,
    endpoint: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

impl OllamaClient {
    /// Build a client. `timeout` bounds the whole call, connect included;
    /// exceeding it surfaces as [`LlmError::ServiceUnavailable`].
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CompletionClient for OllamaClient {
    fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let payload = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            prompt_len = prompt.len(),
            "sending completion request"
        );

        let mut response = self
            .agent
            .post(self.endpoint.as_str())
            .send_json(&payload)
            .map_err(|e| LlmError::ServiceUnavailable(e.to_string()))?;

        let body: GenerateResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| LlmError::ServiceUnavailable(format!("unreadable response body: {e}")))?;

        let text = body.response.unwrap_or_default().trim().to_string();
        debug!(response_len = text.len(), "completion received");

        Ok(text)
    }
}

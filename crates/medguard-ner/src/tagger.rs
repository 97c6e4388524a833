//! HTTP client for an NER sidecar.
//!
//! The sidecar owns the model (e.g. spaCy `en_core_web_sm`) and keeps it
//! loaded; this side only speaks its JSON contract:
//!
//! ```text
//! POST <endpoint>  {"text": "..."}
//! 200              {"entities": [{"text", "label", "start_char", "end_char"}]}
//! ```

use std::time::Duration;

use medguard_core::models::validation::DetectedEntity;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ureq::Agent;

use crate::error::NerError;
use crate::scanner::EntityTagger;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8001/entities";

#[derive(Clone)]
pub struct HttpEntityTagger {
    agent: Agent,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct TagRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TagResponse {
    #[serde(default)]
    entities: Vec<DetectedEntity>,
}

impl HttpEntityTagger {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EntityTagger for HttpEntityTagger {
    fn tag(&self, text: &str) -> Result<Vec<DetectedEntity>, NerError> {
        let mut response = self
            .agent
            .post(self.endpoint.as_str())
            .send_json(&TagRequest { text })
            .map_err(|e| NerError::ScannerUnavailable(e.to_string()))?;

        let body: TagResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| NerError::ScannerUnavailable(format!("unreadable response body: {e}")))?;

        debug!(entities = body.entities.len(), "tagger response received");
        Ok(body.entities)
    }
}

use serde::{Deserialize, Serialize};

use crate::models::replacement::Replacement;
use crate::models::validation::ValidationResult;

/// Inbound payload for `POST /deidentify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeidentifyRequest {
    pub note: String,
}

/// The assembled result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeidentifyResponse {
    pub deidentified_note: String,
    pub replacements: Vec<Replacement>,
    pub validation: ValidationResult,
    /// Diagnostic copy of the model text that was parsed (or failed to).
    pub raw_llm_output: Option<String>,
}

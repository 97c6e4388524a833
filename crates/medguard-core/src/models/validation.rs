use serde::{Deserialize, Serialize};

/// A span flagged by the residual scanner in the redacted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedEntity {
    pub text: String,
    /// Category as reported by the tagger, e.g. `PERSON` or `DATE`.
    pub label: String,
    /// Character offset (inclusive) into the redacted note.
    pub start_char: usize,
    /// Character offset (exclusive) into the redacted note.
    pub end_char: usize,
}

/// Aggregate verdict of the residual scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub has_remaining_phi: bool,
    pub entities: Vec<DetectedEntity>,
}

impl ValidationResult {
    /// Build a verdict whose flag is derived from the entity list, so the
    /// two can never disagree.
    pub fn from_entities(entities: Vec<DetectedEntity>) -> Self {
        Self {
            has_remaining_phi: !entities.is_empty(),
            entities,
        }
    }

    pub fn clean() -> Self {
        Self::from_entities(Vec::new())
    }
}

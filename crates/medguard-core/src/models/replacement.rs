use serde::{Deserialize, Serialize};

/// A single PHI replacement proposed by the completion model.
///
/// The model is untrusted, so nothing here is validated: `original` may be
/// empty, `tag` may fall outside the allowed tag set, and the pair need not
/// match the note at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Source span that was replaced. Empty when the model omitted it.
    #[serde(default)]
    pub original: String,
    /// Placeholder written into the note, e.g. `[PATIENT_NAME]`. Empty when
    /// the model omitted it.
    #[serde(default)]
    pub tag: String,
    /// Human-readable category. Absent when missing, null or not a string.
    #[serde(default)]
    pub category: Option<String>,
}

/// How [`ExtractionResult`] was obtained from the model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryOutcome {
    /// A JSON object was recovered and its fields were read.
    Parsed,
    /// Nothing parseable was found; the note was passed through unredacted.
    Fallback,
}

/// The structured outcome of one completion call.
///
/// Built once per request by output recovery and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub deidentified_note: String,
    pub replacements: Vec<Replacement>,
    /// The candidate text that was parsed, or that failed to parse.
    pub raw_output: String,
    pub outcome: RecoveryOutcome,
}

impl ExtractionResult {
    /// The safe default: leave the note untouched and report no replacements.
    pub fn unredacted(original_note: &str, raw_output: impl Into<String>) -> Self {
        Self {
            deidentified_note: original_note.to_string(),
            replacements: Vec::new(),
            raw_output: raw_output.into(),
            outcome: RecoveryOutcome::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.outcome == RecoveryOutcome::Fallback
    }
}

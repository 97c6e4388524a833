use std::sync::Arc;

use medguard_core::models::validation::{DetectedEntity, ValidationResult};
use tracing::debug;

use crate::error::NerError;

/// Tagger labels treated as possible remaining PHI.
pub const WATCH_LIST: &[&str] = &[
    "PERSON", "ORG", "GPE", "LOC", "FAC", "NORP", "DATE", "TIME", "CARDINAL",
];

/// A named-entity tagger: text in, labelled character spans out.
///
/// Implementations are built once at startup and shared read-only across
/// requests, so they must be safe to call concurrently.
pub trait EntityTagger: Send + Sync {
    /// Every entity found in `text`, in the tagger's own order and label
    /// vocabulary.
    fn tag(&self, text: &str) -> Result<Vec<DetectedEntity>, NerError>;
}

pub fn is_watched(label: &str) -> bool {
    WATCH_LIST.contains(&label)
}

/// Reports watch-list entities that survived redaction.
///
/// Reporting only: the note is never altered, overlapping spans are not
/// merged, and nothing is checked against the replacements already made.
#[derive(Clone)]
pub struct Scanner {
    tagger: Arc<dyn EntityTagger>,
}

impl Scanner {
    pub fn new(tagger: Arc<dyn EntityTagger>) -> Self {
        Self { tagger }
    }

    pub fn scan(&self, note: &str) -> Result<ValidationResult, NerError> {
        let tagged = self.tagger.tag(note)?;
        let tagged_count = tagged.len();

        let flagged: Vec<DetectedEntity> = tagged
            .into_iter()
            .filter(|entity| is_watched(&entity.label))
            .collect();

        debug!(
            tagged = tagged_count,
            flagged = flagged.len(),
            "residual scan complete"
        );

        Ok(ValidationResult::from_entities(flagged))
    }
}

//! The de-identification pipeline.
//!
//! prompt → completion → output recovery → whitespace normalization →
//! residual scan → response. One pass: the scan verdict is reported to the
//! caller and never fed back into redaction.

use std::sync::Arc;

use medguard_core::models::deidentify::DeidentifyResponse;
use medguard_core::text::normalize_whitespace;
use medguard_llm::client::CompletionClient;
use medguard_llm::detect::detect_phi;
use medguard_llm::error::LlmError;
use medguard_ner::error::NerError;
use medguard_ner::scanner::Scanner;
use thiserror::Error;
use tracing::{info, info_span};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    ServiceUnavailable(#[from] LlmError),

    #[error(transparent)]
    ScannerUnavailable(#[from] NerError),
}

pub struct Deidentifier {
    completion: Arc<dyn CompletionClient>,
    scanner: Scanner,
}

impl Deidentifier {
    pub fn new(completion: Arc<dyn CompletionClient>, scanner: Scanner) -> Self {
        Self {
            completion,
            scanner,
        }
    }

    /// Run the full pipeline for one note. Blocking.
    ///
    /// Fails only when the completion service or the tagger is unavailable.
    /// Unusable model output still yields a complete response carrying the
    /// original note.
    pub fn deidentify(&self, note: &str) -> Result<DeidentifyResponse, PipelineError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("deidentify", request_id = %request_id);
        let _entered = span.enter();

        let extraction = detect_phi(self.completion.as_ref(), note)?;

        // raw_output stays verbatim for diagnostics.
        let deidentified_note = normalize_whitespace(&extraction.deidentified_note);
        let validation = self.scanner.scan(&deidentified_note)?;

        info!(
            replacements = extraction.replacements.len(),
            fallback = extraction.is_fallback(),
            has_remaining_phi = validation.has_remaining_phi,
            flagged_entities = validation.entities.len(),
            "de-identification complete"
        );

        Ok(DeidentifyResponse {
            deidentified_note,
            replacements: extraction.replacements,
            validation,
            raw_llm_output: Some(extraction.raw_output),
        })
    }
}

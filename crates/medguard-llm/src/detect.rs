use medguard_core::models::replacement::ExtractionResult;
use tracing::{info, warn};

use crate::client::CompletionClient;
use crate::error::LlmError;
use crate::prompt::build_prompt;
use crate::recover::recover;

/// Ask the completion model to de-identify `note`.
///
/// Renders the prompt, calls the service, and recovers a structured result.
/// Only a service failure is an error; unusable model output degrades to
/// the unredacted note with no replacements.
pub fn detect_phi(client: &dyn CompletionClient, note: &str) -> Result<ExtractionResult, LlmError> {
    info!(note_len = note.len(), "starting PHI detection");

    let prompt = build_prompt(note);
    let raw = client.complete(&prompt)?;
    let result = recover(&raw, note);

    if result.is_fallback() {
        warn!(
            raw_len = raw.len(),
            "completion output could not be recovered, note left unredacted"
        );
    }

    info!(
        replacements = result.replacements.len(),
        "PHI detection complete"
    );

    Ok(result)
}

//! Recovery of structured output from model text.
//!
//! Models do not reliably return the raw JSON they are asked for. Recovery
//! runs a fixed chain of stages, each aimed at one observed failure mode:
//!
//! 1. [`unquote`]: the whole response was emitted as a JSON string literal.
//! 2. [`excise_object`]: the object is surrounded by prose.
//! 3. [`parse_object`]: strict parse of what is left.
//! 4. Field reading, defaulting each malformed field in place.
//!
//! If stage 3 fails the note is returned unredacted with no replacements.
//! A corrupted partial redaction is worse than none, and the residual scan
//! downstream still reports whatever PHI is left.

use std::borrow::Cow;

use medguard_core::models::replacement::{ExtractionResult, RecoveryOutcome, Replacement};
use serde_json::{Map, Value};
use tracing::debug;

/// Recover an [`ExtractionResult`] from raw model text. Never fails.
pub fn recover(raw_text: &str, original_note: &str) -> ExtractionResult {
    let trimmed = raw_text.trim();
    let unquoted = unquote(trimmed);
    let candidate = excise_object(&unquoted);

    debug!(
        raw_len = raw_text.len(),
        candidate_len = candidate.len(),
        unquoted = matches!(unquoted, Cow::Owned(_)),
        excised = candidate.len() != unquoted.len(),
        "recovering structured output"
    );

    match parse_object(candidate) {
        Some(object) => read_fields(&object, candidate, original_note),
        None => ExtractionResult::unredacted(original_note, candidate),
    }
}

/// Decode text that is entirely a JSON string literal, e.g.
/// `"{\"deidentified_note\": ...}"`.
///
/// Returns the input unchanged when it is not quoted or does not decode.
pub fn unquote(text: &str) -> Cow<'_, str> {
    if text.starts_with('"') && text.ends_with('"') {
        if let Ok(inner) = serde_json::from_str::<String>(text) {
            return Cow::Owned(inner);
        }
    }
    Cow::Borrowed(text)
}

/// Narrow `text` to the span from its first `{` to its last `}`.
///
/// This is a greedy cut, not brace matching. Returns the input unchanged
/// when there is no such span.
pub fn excise_object(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Strictly parse `candidate` as a JSON object.
///
/// Syntax errors and non-object top-level values both yield `None`.
pub fn parse_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => Some(object),
        Ok(other) => {
            debug!(kind = json_kind(&other), "model output is not a JSON object");
            None
        }
        Err(e) => {
            debug!(error = %e, "model output is not valid JSON");
            None
        }
    }
}

/// Read the result fields.
///
/// - `deidentified_note`: string, else the original note.
/// - `replacements`: array, else empty. Elements that are not objects are
///   skipped; the rest are kept.
fn read_fields(object: &Map<String, Value>, candidate: &str, original_note: &str) -> ExtractionResult {
    let deidentified_note = object
        .get("deidentified_note")
        .and_then(Value::as_str)
        .unwrap_or(original_note)
        .to_string();

    let replacements = object
        .get("replacements")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(read_replacement).collect())
        .unwrap_or_default();

    ExtractionResult {
        deidentified_note,
        replacements,
        raw_output: candidate.to_string(),
        outcome: RecoveryOutcome::Parsed,
    }
}

/// `original` and `tag` default to empty; `category` defaults to absent.
fn read_replacement(item: &Value) -> Option<Replacement> {
    let fields = item.as_object()?;
    Some(Replacement {
        original: string_field(fields, "original").unwrap_or_default(),
        tag: string_field(fields, "tag").unwrap_or_default(),
        category: string_field(fields, "category"),
    })
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

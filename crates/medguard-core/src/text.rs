//! Text helpers shared by the pipeline stages.

use crate::models::replacement::Replacement;

/// Collapse every run of whitespace to a single space and trim both ends.
///
/// Idempotent: normalizing an already-normalized string returns it as is.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render replacements as a human-readable multi-line list.
///
/// The output contains the original PHI spans. It is meant for operators
/// inspecting a single result, never for service logs.
pub fn format_replacement_log(replacements: &[Replacement]) -> String {
    if replacements.is_empty() {
        return "No PHI replacements recorded.".to_string();
    }

    replacements
        .iter()
        .map(|r| match r.category.as_deref() {
            Some(category) if !category.is_empty() => {
                format!("- '{}' → {} ({category})", r.original, r.tag)
            }
            _ => format!("- '{}' → {}", r.original, r.tag),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

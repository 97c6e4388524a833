use medguard_core::models::deidentify::{DeidentifyRequest, DeidentifyResponse};
use medguard_core::models::replacement::{ExtractionResult, RecoveryOutcome, Replacement};
use medguard_core::models::validation::{DetectedEntity, ValidationResult};
use serde_json::json;

#[test]
fn validation_flag_follows_entities() {
    assert!(!ValidationResult::clean().has_remaining_phi);

    let verdict = ValidationResult::from_entities(vec![DetectedEntity {
        text: "Boston".to_string(),
        label: "GPE".to_string(),
        start_char: 10,
        end_char: 16,
    }]);
    assert!(verdict.has_remaining_phi);
    assert_eq!(verdict.entities.len(), 1);
}

#[test]
fn unredacted_result_keeps_note_and_raw_text() {
    let result = ExtractionResult::unredacted("Seen by Dr. Smith.", "not json");
    assert_eq!(result.deidentified_note, "Seen by Dr. Smith.");
    assert!(result.replacements.is_empty());
    assert_eq!(result.raw_output, "not json");
    assert_eq!(result.outcome, RecoveryOutcome::Fallback);
    assert!(result.is_fallback());
}

#[test]
fn response_uses_snake_case_wire_names() {
    let response = DeidentifyResponse {
        deidentified_note: "Patient [PATIENT_NAME] seen.".to_string(),
        replacements: vec![Replacement {
            original: "Alice Brown".to_string(),
            tag: "[PATIENT_NAME]".to_string(),
            category: None,
        }],
        validation: ValidationResult::from_entities(vec![DetectedEntity {
            text: "today".to_string(),
            label: "DATE".to_string(),
            start_char: 0,
            end_char: 5,
        }]),
        raw_llm_output: Some("{}".to_string()),
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({
            "deidentified_note": "Patient [PATIENT_NAME] seen.",
            "replacements": [
                { "original": "Alice Brown", "tag": "[PATIENT_NAME]", "category": null }
            ],
            "validation": {
                "has_remaining_phi": true,
                "entities": [
                    { "text": "today", "label": "DATE", "start_char": 0, "end_char": 5 }
                ]
            },
            "raw_llm_output": "{}"
        })
    );
}

#[test]
fn request_reads_note_field() {
    let request: DeidentifyRequest =
        serde_json::from_value(json!({ "note": "Patient reported fever." })).unwrap();
    assert_eq!(request.note, "Patient reported fever.");
}

#[test]
fn replacement_deserializes_with_missing_fields() {
    let replacement: Replacement = serde_json::from_value(json!({ "tag": "[DATE]" })).unwrap();
    assert_eq!(replacement.original, "");
    assert_eq!(replacement.tag, "[DATE]");
    assert_eq!(replacement.category, None);
}

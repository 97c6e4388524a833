//! Instruction prompt for the de-identification model.
//!
//! The prompt is fixed apart from the note, which is appended after the
//! `INPUT_NOTE:` marker. The note is concatenated, never substituted into a
//! placeholder, so a note that happens to contain template-looking tokens
//! is embedded verbatim and exactly once.

/// Placeholder tags the model may write into the note.
pub const ALLOWED_TAGS: &[&str] = &[
    "[PATIENT_NAME]",
    "[DOCTOR_NAME]",
    "[HOSPITAL]",
    "[LOCATION]",
    "[DATE]",
    "[PHONE]",
    "[EMAIL]",
    "[ID]",
    "[AGE]",
    "[OTHER_PHI]",
];

/// PHI categories the model is asked to detect.
pub const PHI_CATEGORIES: &[&str] = &[
    "Patient names",
    "Doctor names",
    "Hospitals / clinics",
    "Locations (city, state, country)",
    "Dates (DOB, admission, discharge, visit date)",
    "Phone numbers",
    "Emails",
    "URLs",
    "Medical record numbers",
    "Account numbers",
    "IDs",
    "Ages > 89",
    "Any unique identifying information",
];

const RULES: &str = "\
You are a clinical de-identification system. Your task is to remove PHI by replacing PHI spans with tags.
You must follow ALL RULES EXACTLY.

CRITICAL RULES (DO NOT BREAK THESE):
1. DO NOT PARAPHRASE THE SENTENCE.
2. DO NOT CHANGE ORDER OF WORDS.
3. DO NOT REMOVE ANY NON-PHI MEDICAL CONTENT.
4. DO NOT INVENT ANY NEW CONTENT.
5. ONLY replace PHI with tags.
6. VERY IMPORTANT: Medical symptoms, conditions, diseases, procedures, and body parts (e.g., chest pain, headache, fever, cough, back pain, left leg, etc.) are **NOT PHI**. NEVER tag them as [OTHER_PHI] or anything else.
7. DO NOT tag clinical terms, diagnoses, symptoms, or treatments.
8. DO NOT USE markdown formatting.
9. DO NOT ESCAPE quotes.
10. DO NOT wrap the JSON output in quotes.
11. RETURN RAW JSON ONLY.
12. The JSON must match the schema exactly.";

const SEPARATOR: &str = "------------------------------------------------------------";

const NEGATIVE_EXAMPLES: &str = r#"NEGATIVE EXAMPLES (NEVER TAG THESE):

Input:
"Patient reported chest pain and fever."

Output:
{
  "deidentified_note": "Patient reported chest pain and fever.",
  "replacements": []
}

Input:
"Patient has tenderness in the left arm."

Output:
{
  "deidentified_note": "Patient has tenderness in the left arm.",
  "replacements": []
}"#;

const POSITIVE_EXAMPLE: &str = r#"POSITIVE EXAMPLE (FOLLOW THIS FORMAT EXACTLY):

Input:
"Patient Alice Brown visited City Hospital on 01/01/2023."

Output:
{
  "deidentified_note": "Patient [PATIENT_NAME] visited [HOSPITAL] on [DATE].",
  "replacements": [
    {
      "original": "Alice Brown",
      "tag": "[PATIENT_NAME]",
      "category": "Patient names"
    },
    {
      "original": "City Hospital",
      "tag": "[HOSPITAL]",
      "category": "Hospitals / clinics"
    },
    {
      "original": "01/01/2023",
      "tag": "[DATE]",
      "category": "Dates"
    }
  ]
}"#;

const OUTPUT_FORMAT: &str = r#"OUTPUT FORMAT (STRICT RAW JSON, NO EXTRA TEXT):

{
  "deidentified_note": "<sentence with PHI replaced>",
  "replacements": [
    {
      "original": "<original PHI span>",
      "tag": "<tag you used>",
      "category": "<PHI category>"
    }
  ]
}

Do NOT output the word "string".
Do NOT add comments.
Do NOT write explanations.
Do NOT tag symptoms.
Do NOT wrap the JSON in quotes."#;

/// Render the full instruction prompt for `note`.
pub fn build_prompt(note: &str) -> String {
    let mut prompt = String::with_capacity(4096 + note.len());

    prompt.push_str(RULES);
    prompt.push_str("\n\nPHI CATEGORIES YOU MUST DETECT:\n");
    for category in PHI_CATEGORIES {
        prompt.push_str("- ");
        prompt.push_str(category);
        prompt.push('\n');
    }
    prompt.push_str("(REMINDER: Symptoms and medical conditions are NOT PHI.)\n");

    prompt.push_str("\nALLOWED TAGS:\n");
    for tag in ALLOWED_TAGS {
        prompt.push_str("- ");
        prompt.push_str(tag);
        prompt.push('\n');
    }

    for section in [NEGATIVE_EXAMPLES, POSITIVE_EXAMPLE, OUTPUT_FORMAT] {
        prompt.push('\n');
        prompt.push_str(SEPARATOR);
        prompt.push('\n');
        prompt.push_str(section);
        prompt.push('\n');
    }

    prompt.push('\n');
    prompt.push_str(SEPARATOR);
    prompt.push_str("\n\nINPUT_NOTE:\n\"");
    prompt.push_str(note);
    prompt.push('"');

    prompt
}

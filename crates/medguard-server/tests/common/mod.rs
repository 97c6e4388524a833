#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use medguard_core::models::validation::DetectedEntity;
use medguard_llm::client::CompletionClient;
use medguard_llm::error::LlmError;
use medguard_ner::error::NerError;
use medguard_ner::scanner::{EntityTagger, Scanner};
use medguard_server::pipeline::Deidentifier;

/// Completion service substitute with a fixed reply.
pub struct CannedCompletion(pub Result<String, String>);

impl CompletionClient for CannedCompletion {
    fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        self.0.clone().map_err(LlmError::ServiceUnavailable)
    }
}

/// Tagger substitute that records what it was asked to scan.
#[derive(Default)]
pub struct RecordingTagger {
    pub entities: Vec<DetectedEntity>,
    pub fail: bool,
    pub seen: Mutex<Vec<String>>,
}

impl EntityTagger for RecordingTagger {
    fn tag(&self, text: &str) -> Result<Vec<DetectedEntity>, NerError> {
        self.seen.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(NerError::ScannerUnavailable("tagger offline".to_string()));
        }
        Ok(self.entities.clone())
    }
}

pub fn pipeline(reply: Result<&str, &str>, tagger: Arc<RecordingTagger>) -> Deidentifier {
    let reply = reply.map(str::to_string).map_err(str::to_string);
    Deidentifier::new(
        Arc::new(CannedCompletion(reply)),
        Scanner::new(tagger),
    )
}

pub const POSITIVE_NOTE: &str = "Patient Alice Brown visited City Hospital on 01/01/2023.";

pub const POSITIVE_REPLY: &str = r#"{
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

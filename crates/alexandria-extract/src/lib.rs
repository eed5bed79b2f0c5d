//! alexandria-extract
//!
//! Rule-based clinical text extraction. Turns a free-text health narrative
//! into an [`ExtractionRecord`]: matched catalog phrases, their codes, a
//! 0–10 severity and a confidence score. Pure computation, no I/O.

pub mod confidence;
pub mod error;
pub mod severity;
pub mod symptoms;

use alexandria_core::models::catalog::SymptomCatalog;
use alexandria_core::models::record::ExtractionRecord;
use tracing::debug;

use crate::error::ExtractError;

/// Extracts structured records from narratives using an injected catalog.
///
/// Holds only shared references, so one extractor can be used from many
/// threads at once.
#[derive(Debug, Clone, Copy)]
pub struct ClinicalTextExtractor<'a> {
    catalog: &'a SymptomCatalog,
}

impl<'a> ClinicalTextExtractor<'a> {
    pub fn new(catalog: &'a SymptomCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a SymptomCatalog {
        self.catalog
    }

    /// Extract a record from a narrative. Never fails for text input.
    pub fn extract(&self, narrative: &str) -> ExtractionRecord {
        let lowered = narrative.to_lowercase();

        let matches = symptoms::match_symptoms(self.catalog, &lowered);
        let (extracted_symptoms, coded_terms): (Vec<String>, Vec<String>) = matches
            .into_iter()
            .map(|e| (e.phrase.clone(), e.code.clone()))
            .unzip();

        let severity = severity::find_severity(&lowered);
        let confidence_score =
            confidence::compute_confidence(extracted_symptoms.len(), severity.is_some());

        debug!(
            symptoms = extracted_symptoms.len(),
            severity = ?severity.map(|m| m.value),
            rule = severity.map(|m| m.rule.name()),
            confidence_score,
            "extracted narrative"
        );

        ExtractionRecord {
            original_text: narrative.to_string(),
            extracted_symptoms,
            coded_terms,
            severity: severity.map(|m| m.value),
            confidence_score,
        }
    }

    /// Extract from a dynamically typed value, e.g. a field of a JSON request.
    ///
    /// Anything other than a JSON string is rejected with
    /// [`ExtractError::InvalidInputType`] and no record is produced.
    pub fn extract_value(
        &self,
        value: &serde_json::Value,
    ) -> Result<ExtractionRecord, ExtractError> {
        match value {
            serde_json::Value::String(text) => Ok(self.extract(text)),
            other => Err(ExtractError::InvalidInputType {
                found: json_type_name(other),
            }),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Highest confidence an extraction can report.
pub const CONFIDENCE_CEILING: f64 = 0.99;

/// Highest value on the self-reported severity scale.
pub const MAX_SEVERITY: u8 = 10;

/// Structured output of one extraction call.
///
/// `extracted_symptoms` and `coded_terms` are positionally parallel:
/// `coded_terms[i]` is the catalog code for `extracted_symptoms[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractionRecord {
    /// The narrative exactly as submitted.
    pub original_text: String,
    /// Matched catalog phrases, deduplicated, in scan order.
    pub extracted_symptoms: Vec<String>,
    pub coded_terms: Vec<String>,
    /// Self-reported 0–10 severity, `null` when none was recognized.
    pub severity: Option<u8>,
    /// Rounded to two decimals, within `[0.0, 0.99]`.
    pub confidence_score: f64,
}

impl ExtractionRecord {
    pub fn has_symptoms(&self) -> bool {
        !self.extracted_symptoms.is_empty()
    }

    /// Iterate matched phrases alongside their codes.
    pub fn coded_symptoms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extracted_symptoms
            .iter()
            .zip(&self.coded_terms)
            .map(|(s, c)| (s.as_str(), c.as_str()))
    }
}

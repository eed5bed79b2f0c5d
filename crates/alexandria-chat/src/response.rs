use alexandria_core::models::record::ExtractionRecord;

const LOGGED_SUFFIX: &str =
    " I've logged your entry so it can support a clearer clinical picture over time.";

/// Build the companion's reply to a user turn from its extraction record.
pub fn build_response_text(record: &ExtractionRecord) -> String {
    let mut reply = if record.has_symptoms() {
        format!(
            "I'm sorry you're experiencing {}.",
            record.extracted_symptoms.join(", ")
        )
    } else {
        "Thank you for sharing how you're feeling.".to_string()
    };

    if let Some(severity) = record.severity {
        reply.push_str(&format!(" You've rated this around {severity}/10."));
    }

    reply.push_str(LOGGED_SUFFIX);
    reply
}

use alexandria_core::models::record::ExtractionRecord;
use alexandria_core::models::transcript::{Transcript, TranscriptTurn, TurnRole};

fn record(text: &str) -> ExtractionRecord {
    ExtractionRecord {
        original_text: text.to_string(),
        extracted_symptoms: vec!["nausea".to_string()],
        coded_terms: vec!["422587007".to_string()],
        severity: None,
        confidence_score: 0.75,
    }
}

#[test]
fn new_transcript_is_empty() {
    let transcript = Transcript::new();
    assert!(transcript.turns.is_empty());
    assert!(transcript.last().is_none());
    assert_eq!(transcript.created_at, transcript.updated_at);
}

#[test]
fn records_only_come_from_assistant_turns() {
    let mut transcript = Transcript::new();
    transcript.push(TranscriptTurn::user("a bit of nausea"));
    transcript.push(TranscriptTurn::assistant("sorry", record("a bit of nausea")));

    assert_eq!(transcript.turns.len(), 2);
    assert_eq!(transcript.records().count(), 1);
    assert_eq!(transcript.last().unwrap().role, TurnRole::Assistant);
    assert!(transcript.updated_at >= transcript.created_at);
}

#[test]
fn record_serializes_with_documented_field_names() {
    let value = serde_json::to_value(record("x")).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "coded_terms",
            "confidence_score",
            "extracted_symptoms",
            "original_text",
            "severity",
        ]
    );
    assert!(object["severity"].is_null());
}

#[test]
fn turn_role_is_snake_case() {
    let json = serde_json::to_string(&TurnRole::Assistant).unwrap();
    assert_eq!(json, "\"assistant\"");
}

use alexandria_chat::conversation::Conversation;
use alexandria_chat::error::ChatError;
use alexandria_chat::response::build_response_text;
use alexandria_core::models::catalog::SymptomCatalog;
use alexandria_core::models::record::ExtractionRecord;
use alexandria_core::models::transcript::TurnRole;
use alexandria_extract::error::ExtractError;
use alexandria_extract::ClinicalTextExtractor;
use serde_json::json;

fn record(symptoms: &[&str], severity: Option<u8>) -> ExtractionRecord {
    ExtractionRecord {
        original_text: String::new(),
        extracted_symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        coded_terms: symptoms.iter().map(|_| "0".to_string()).collect(),
        severity,
        confidence_score: 0.5,
    }
}

#[test]
fn reply_lists_symptoms_and_severity() {
    let reply = build_response_text(&record(&["pelvic pain", "fatigue"], Some(7)));
    assert_eq!(
        reply,
        "I'm sorry you're experiencing pelvic pain, fatigue. \
         You've rated this around 7/10. \
         I've logged your entry so it can support a clearer clinical picture over time."
    );
}

#[test]
fn reply_without_symptoms_thanks_the_user() {
    let reply = build_response_text(&record(&[], None));
    assert_eq!(
        reply,
        "Thank you for sharing how you're feeling. \
         I've logged your entry so it can support a clearer clinical picture over time."
    );
}

#[test]
fn severity_zero_is_still_reported() {
    let reply = build_response_text(&record(&[], Some(0)));
    assert!(reply.contains("You've rated this around 0/10."));
}

#[test]
fn submit_appends_user_and_assistant_turns() {
    let catalog = SymptomCatalog::reference();
    let mut conversation = Conversation::new(ClinicalTextExtractor::new(&catalog));

    let text = "Lower back pain is killing me, it's like 9/10 right now.";
    let turn = conversation.submit(text);
    assert_eq!(turn.role, TurnRole::Assistant);
    let extracted = turn.extracted.as_ref().unwrap();
    assert_eq!(extracted.extracted_symptoms, vec!["lower back pain"]);
    assert!(turn.content.starts_with("I'm sorry you're experiencing lower back pain."));

    let history = conversation.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, TurnRole::User);
    assert_eq!(history[0].content, text);
    assert!(history[0].extracted.is_none());
}

#[test]
fn non_text_payload_drops_the_turn() {
    let catalog = SymptomCatalog::reference();
    let mut conversation = Conversation::new(ClinicalTextExtractor::new(&catalog));

    conversation.submit("Terrible headache and fatigue, couldn't sleep at all.");
    let err = conversation.submit_value(&json!(42)).unwrap_err();
    assert!(matches!(
        err,
        ChatError::Extraction(ExtractError::InvalidInputType { found: "number" })
    ));
    assert_eq!(conversation.history().len(), 2);

    // The conversation carries on after a dropped turn.
    let turn = conversation.submit_value(&json!("a bit of nausea")).unwrap();
    assert_eq!(turn.extracted.as_ref().unwrap().severity, None);
    assert_eq!(conversation.history().len(), 4);
}

#[test]
fn transcript_collects_records_in_order() {
    let catalog = SymptomCatalog::reference();
    let mut conversation = Conversation::new(ClinicalTextExtractor::new(&catalog));
    conversation.submit("migraine, 6/10");
    conversation.submit("");

    let transcript = conversation.into_transcript();
    let scores: Vec<f64> = transcript.records().map(|r| r.confidence_score).collect();
    assert_eq!(scores, vec![0.9, 0.5]);

    let json = serde_json::to_value(&transcript).unwrap();
    assert_eq!(json["turns"].as_array().unwrap().len(), 4);
    assert_eq!(json["turns"][1]["role"], "assistant");
    assert_eq!(json["turns"][1]["extracted"]["severity"], 6);
}

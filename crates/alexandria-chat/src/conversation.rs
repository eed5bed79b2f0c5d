use alexandria_core::models::record::ExtractionRecord;
use alexandria_core::models::transcript::{Transcript, TranscriptTurn};
use alexandria_extract::ClinicalTextExtractor;
use tracing::{info, warn};

use crate::error::ChatError;
use crate::response::build_response_text;

/// A single in-memory conversation.
///
/// Every user turn is extracted exactly once; the record rides on the
/// assistant turn that answers it. Nothing is retried.
pub struct Conversation<'a> {
    extractor: ClinicalTextExtractor<'a>,
    transcript: Transcript,
}

impl<'a> Conversation<'a> {
    pub fn new(extractor: ClinicalTextExtractor<'a>) -> Self {
        Self {
            extractor,
            transcript: Transcript::new(),
        }
    }

    /// Record a user narrative and return the assistant turn that answers it.
    pub fn submit(&mut self, text: &str) -> &TranscriptTurn {
        let record = self.extractor.extract(text);
        self.log_exchange(record)
    }

    /// Like [`submit`](Self::submit), for a dynamically typed payload.
    ///
    /// A non-string payload drops the whole turn: nothing is appended and
    /// the transcript stays usable for the next turn.
    pub fn submit_value(
        &mut self,
        value: &serde_json::Value,
    ) -> Result<&TranscriptTurn, ChatError> {
        let record = match self.extractor.extract_value(value) {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    transcript_id = %self.transcript.id,
                    error = %e,
                    "dropping turn"
                );
                return Err(e.into());
            }
        };
        Ok(self.log_exchange(record))
    }

    fn log_exchange(&mut self, record: ExtractionRecord) -> &TranscriptTurn {
        self.transcript
            .push(TranscriptTurn::user(record.original_text.clone()));

        let reply = build_response_text(&record);
        info!(
            transcript_id = %self.transcript.id,
            turns = self.transcript.turns.len() + 1,
            symptoms = record.extracted_symptoms.len(),
            severity = ?record.severity,
            "logged entry"
        );
        self.transcript.push(TranscriptTurn::assistant(reply, record));

        &self.transcript.turns[self.transcript.turns.len() - 1]
    }

    pub fn history(&self) -> &[TranscriptTurn] {
        &self.transcript.turns
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }
}

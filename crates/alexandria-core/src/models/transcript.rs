use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::record::ExtractionRecord;

/// An in-memory conversation between the user and the companion.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transcript {
    pub id: Uuid,
    pub turns: Vec<TranscriptTurn>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Transcript {
    pub fn new() -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn push(&mut self, turn: TranscriptTurn) {
        self.updated_at = turn.timestamp;
        self.turns.push(turn);
    }

    pub fn last(&self) -> Option<&TranscriptTurn> {
        self.turns.last()
    }

    /// Extraction records attached to assistant turns, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &ExtractionRecord> {
        self.turns.iter().filter_map(|t| t.extracted.as_ref())
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// A single turn in a [`Transcript`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TranscriptTurn {
    pub role: TurnRole,
    pub content: String,
    /// Only assistant turns carry a record.
    pub extracted: Option<ExtractionRecord>,
    pub timestamp: jiff::Timestamp,
}

impl TranscriptTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            extracted: None,
            timestamp: jiff::Timestamp::now(),
        }
    }

    pub fn assistant(content: impl Into<String>, extracted: ExtractionRecord) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            extracted: Some(extracted),
            timestamp: jiff::Timestamp::now(),
        }
    }
}

/// Role of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TurnRole {
    User,
    Assistant,
}

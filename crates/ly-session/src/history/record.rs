//! History record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ly_engine::{Hexagram, Language, Reading};

/// One saved reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique id.
    pub id: Uuid,
    /// When the hexagram was cast.
    pub timestamp: DateTime<Utc>,
    /// The cast hexagram.
    pub hexagram: Hexagram,
    /// The querent's question; may be empty.
    #[serde(default)]
    pub question: String,
    /// The composed report, as markdown.
    pub interpretation: String,
    /// Language of the report.
    pub language: Language,
}

impl HistoryRecord {
    /// Record a reading of `hexagram` under a fresh id.
    pub fn new(hexagram: Hexagram, question: impl Into<String>, reading: &Reading) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: hexagram.created_at(),
            hexagram,
            question: question.into(),
            interpretation: reading.to_markdown(),
            language: reading.language,
        }
    }

    /// Name of the cast hexagram in the record's language.
    pub fn hexagram_name(&self) -> &'static str {
        self.language.hexagram_name(self.hexagram.bits().value())
    }
}

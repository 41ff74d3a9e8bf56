//! Frequently asked questions

use serde::{Deserialize, Serialize};

use crate::types::{de, Record, RecordId};

/// A question/answer pair. Wire field names are `qus` and `answers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(deserialize_with = "de::id")]
    pub id: RecordId,
    #[serde(rename = "qus")]
    pub question: String,
    #[serde(rename = "answers", default)]
    pub answer: String,
}

impl Record for Faq {
    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.question
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str(), self.answer.as_str()]
    }
}

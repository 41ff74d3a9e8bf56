//! Blog posts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{de, Record, RecordId};

/// A published article. The banner is uploaded as a file; `banner_image`
/// holds the server-relative path returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(deserialize_with = "de::id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Kept as the raw `YYYY-MM-DD` string the form edits
    #[serde(default)]
    pub publish_date: String,
    /// Comma-separated tag list
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_content: String,
    #[serde(default, deserialize_with = "de::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Blog {
    /// Tags split on commas, trimmed, empties dropped
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

impl Record for Blog {
    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.author.as_str(),
            self.tags.as_str(),
            self.short_description.as_str(),
        ]
    }
}

//! Services, shown in the console as certifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{de, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(deserialize_with = "de::id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "de::flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "de::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for Service {
    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

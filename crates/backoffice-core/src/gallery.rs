//! Gallery images
//!
//! The gallery has no live backend. Its list is seeded from [`demo_items`]
//! whenever the page is entered and all edits stay in memory.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: RecordId,
    pub title: String,
    /// Image path or URL
    pub image: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Record for GalleryItem {
    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

/// Fixed sample rows shown on the gallery page
pub fn demo_items() -> Vec<GalleryItem> {
    let seed = [
        (1, "Audit team on site", "/images/gallery/audit-team.jpg", 5),
        (2, "Certificate ceremony", "/images/gallery/ceremony.jpg", 12),
        (3, "Training workshop", "/images/gallery/workshop.jpg", 20),
        (4, "Office opening", "/images/gallery/office.jpg", 28),
    ];
    seed.into_iter()
        .map(|(id, title, image, day)| GalleryItem {
            id,
            title: title.to_string(),
            image: image.to_string(),
            created_at: Utc
                .with_ymd_and_hms(2024, 1, day, 9, 0, 0)
                .single()
                .unwrap_or_default(),
        })
        .collect()
}

/// Next free id for a locally created item
pub fn next_id(items: &[GalleryItem]) -> RecordId {
    items.iter().map(|item| item.id).max().unwrap_or(0) + 1
}

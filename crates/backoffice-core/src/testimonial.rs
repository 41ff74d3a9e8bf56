//! Client testimonials

use serde::{Deserialize, Serialize};

use crate::types::{de, Record, RecordId};

/// Lowest and highest accepted star rating
pub const MIN_STARS: i32 = 1;
pub const MAX_STARS: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(deserialize_with = "de::id")]
    pub id: RecordId,
    #[serde(default)]
    pub comment: String,
    #[serde(default = "default_stars", deserialize_with = "stars")]
    pub review_stars: i32,
    pub client_name: String,
    #[serde(default)]
    pub client_position: Option<String>,
    #[serde(default)]
    pub client_company: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "de::flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "de::opt_i32")]
    pub display_order: Option<i32>,
}

fn default_stars() -> i32 {
    MAX_STARS
}

fn stars<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let value = de::opt_i32(deserializer)?.unwrap_or(MAX_STARS);
    Ok(clamp_stars(value))
}

/// Clamp a rating into `MIN_STARS..=MAX_STARS`
pub fn clamp_stars(value: i32) -> i32 {
    value.clamp(MIN_STARS, MAX_STARS)
}

impl Testimonial {
    /// `★★★☆☆` style rendering
    pub fn star_string(&self) -> String {
        let filled = clamp_stars(self.review_stars) as usize;
        let empty = MAX_STARS as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl Record for Testimonial {
    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.client_name
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.client_name.as_str(), self.comment.as_str()];
        if let Some(company) = &self.client_company {
            fields.push(company);
        }
        if let Some(position) = &self.client_position {
            fields.push(position);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_are_clamped() {
        let t: Testimonial =
            serde_json::from_str(r#"{"id":1,"client_name":"Ann","review_stars":9}"#).unwrap();
        assert_eq!(t.review_stars, 5);

        let t: Testimonial =
            serde_json::from_str(r#"{"id":1,"client_name":"Ann","review_stars":"0"}"#).unwrap();
        assert_eq!(t.review_stars, 1);
    }

    #[test]
    fn test_star_string() {
        let t: Testimonial =
            serde_json::from_str(r#"{"id":1,"client_name":"Ann","review_stars":3}"#).unwrap();
        assert_eq!(t.star_string(), "★★★☆☆");
    }

    #[test]
    fn test_optional_fields_and_search() {
        let t: Testimonial = serde_json::from_str(
            r#"{"id":"4","client_name":"Ann","client_company":"Acme","is_active":true,
                "display_order":null}"#,
        )
        .unwrap();
        assert!(t.is_active);
        assert!(t.display_order.is_none());
        assert!(t.image_url.is_none());
        assert!(t.matches("acme"));
    }
}

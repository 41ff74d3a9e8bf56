//! Resource catalogue and shared record vocabulary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Server-assigned record identifier. Immutable once assigned.
pub type RecordId = i64;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// How a resource's list view applies the search term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Search term is sent to the backend as a query parameter (debounced)
    Server,
    /// Search term filters the already-fetched rows locally
    Client,
}

/// One CRUD-managed entity type.
///
/// Declaration order is the sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Leads,
    Blogs,
    Services,
    Faqs,
    Galleries,
    Testimonials,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Leads,
        Resource::Blogs,
        Resource::Services,
        Resource::Faqs,
        Resource::Galleries,
        Resource::Testimonials,
    ];

    /// Human-readable page title
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Leads => "Leads",
            Resource::Blogs => "Blogs",
            Resource::Services => "Certifications",
            Resource::Faqs => "FAQs",
            Resource::Galleries => "Gallery",
            Resource::Testimonials => "Testimonials",
        }
    }

    /// Singular noun used in dialogs ("Delete blog #3?")
    pub fn noun(&self) -> &'static str {
        match self {
            Resource::Leads => "lead",
            Resource::Blogs => "blog",
            Resource::Services => "certification",
            Resource::Faqs => "FAQ",
            Resource::Galleries => "image",
            Resource::Testimonials => "testimonial",
        }
    }

    /// Sidebar group heading
    pub fn nav_group(&self) -> &'static str {
        match self {
            Resource::Leads => "Inbox",
            Resource::Blogs | Resource::Faqs | Resource::Galleries | Resource::Testimonials => {
                "Content"
            }
            Resource::Services => "Catalog",
        }
    }

    /// REST base path. `None` for resources with no live backend.
    pub fn base_path(&self) -> Option<&'static str> {
        match self {
            Resource::Leads => Some("/api/contact/leads"),
            Resource::Blogs => Some("/api/blogs"),
            Resource::Services => Some("/api/services"),
            Resource::Faqs => Some("/api/faqs"),
            Resource::Galleries => None,
            Resource::Testimonials => Some("/api/testimonials/admin"),
        }
    }

    pub fn search_mode(&self) -> SearchMode {
        match self {
            Resource::Leads | Resource::Faqs => SearchMode::Server,
            _ => SearchMode::Client,
        }
    }

    /// Whether the list is paginated by the backend
    pub fn is_paginated(&self) -> bool {
        matches!(self, Resource::Leads)
    }

    pub fn can_create(&self) -> bool {
        !matches!(self, Resource::Leads)
    }

    pub fn can_edit(&self) -> bool {
        matches!(
            self,
            Resource::Blogs | Resource::Faqs | Resource::Galleries | Resource::Testimonials
        )
    }

    pub fn can_delete(&self) -> bool {
        !matches!(self, Resource::Leads)
    }

    /// Whether the active flag has a dedicated toggle endpoint
    pub fn can_toggle_active(&self) -> bool {
        matches!(self, Resource::Services)
    }

    /// Whether edit mode refetches the full record by id before opening
    pub fn refetch_before_edit(&self) -> bool {
        matches!(self, Resource::Blogs)
    }

    /// Position in [`Resource::ALL`]
    pub fn index(&self) -> usize {
        Resource::ALL.iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn next(&self) -> Resource {
        Resource::ALL[(self.index() + 1) % Resource::ALL.len()]
    }

    pub fn prev(&self) -> Resource {
        let idx = self.index();
        if idx == 0 {
            Resource::ALL[Resource::ALL.len() - 1]
        } else {
            Resource::ALL[idx - 1]
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leads" | "lead" | "contact" => Ok(Resource::Leads),
            "blogs" | "blog" => Ok(Resource::Blogs),
            "services" | "service" | "certifications" => Ok(Resource::Services),
            "faqs" | "faq" => Ok(Resource::Faqs),
            "galleries" | "gallery" => Ok(Resource::Galleries),
            "testimonials" | "testimonial" => Ok(Resource::Testimonials),
            other => Err(Error::parse(
                "resource",
                other,
                ["leads", "blogs", "certifications", "faqs", "galleries", "testimonials"],
            )),
        }
    }
}

/// A normalised page of records.
///
/// `total` and `total_pages` are only present when the backend paginates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
    pub total_pages: Option<u32>,
}

impl<T> ListPage<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            total: None,
            total_pages: None,
        }
    }

    pub fn with_totals(mut self, total: Option<u64>, total_pages: Option<u32>) -> Self {
        self.total = total;
        self.total_pages = total_pages;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Common behaviour of every managed record
pub trait Record: Clone + fmt::Debug + Send + Sync + 'static {
    fn id(&self) -> RecordId;

    /// Primary display text (name, title, question)
    fn title(&self) -> &str;

    /// Fields consulted by client-side search
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over [`Record::search_fields`].
    /// An empty query matches everything.
    fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Lenient deserializers for backend payloads.
///
/// The backends disagree on wire types: ids arrive as numbers or numeric
/// strings, flags as booleans or 0/1, timestamps as RFC 3339 or SQL datetimes.
pub mod de {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::RecordId;

    fn value_to_id(value: &Value) -> Option<RecordId> {
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RecordId, D::Error> {
        let value = Value::deserialize(deserializer)?;
        value_to_id(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid record id: {value}")))
    }

    pub fn opt_id<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<RecordId>, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(value_to_id))
    }

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Bool(b)) => b,
            Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
            Some(Value::String(s)) => matches!(s.as_str(), "true" | "1"),
            _ => false,
        })
    }

    pub fn opt_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn opt_datetime<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().and_then(parse_datetime))
    }

    /// Parse RFC 3339 or `YYYY-MM-DD HH:MM:SS` (assumed UTC)
    pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_navigation_wraps() {
        assert_eq!(Resource::Leads.next(), Resource::Blogs);
        assert_eq!(Resource::Testimonials.next(), Resource::Leads);
        assert_eq!(Resource::Leads.prev(), Resource::Testimonials);
    }

    #[test]
    fn test_resource_from_str() {
        assert_eq!("faqs".parse::<Resource>().unwrap(), Resource::Faqs);
        assert_eq!(" Blog ".parse::<Resource>().unwrap(), Resource::Blogs);
        assert_eq!(
            "certifications".parse::<Resource>().unwrap(),
            Resource::Services
        );
        let err = "widgets".parse::<Resource>().unwrap_err();
        assert!(matches!(err, Error::Parse { kind: "resource", .. }));
    }

    #[test]
    fn test_gallery_has_no_backend() {
        assert!(Resource::Galleries.base_path().is_none());
        for resource in Resource::ALL {
            if resource != Resource::Galleries {
                assert!(resource.base_path().is_some(), "{resource:?}");
            }
        }
    }

    #[test]
    fn test_search_modes() {
        assert_eq!(Resource::Leads.search_mode(), SearchMode::Server);
        assert_eq!(Resource::Faqs.search_mode(), SearchMode::Server);
        assert_eq!(Resource::Services.search_mode(), SearchMode::Client);
    }

    #[test]
    fn test_capabilities() {
        assert!(!Resource::Leads.can_create());
        assert!(!Resource::Services.can_edit());
        assert!(Resource::Services.can_toggle_active());
        assert!(Resource::Blogs.refetch_before_edit());
    }

    #[test]
    fn test_parse_datetime_formats() {
        assert!(de::parse_datetime("2024-03-01T10:00:00.000Z").is_some());
        assert!(de::parse_datetime("2024-03-01 10:00:00").is_some());
        assert!(de::parse_datetime("yesterday").is_none());
    }

    #[test]
    fn test_list_page_totals() {
        let page = ListPage::new(vec![1, 2, 3]).with_totals(Some(30), Some(10));
        assert_eq!(page.len(), 3);
        assert_eq!(page.total, Some(30));
        assert_eq!(page.total_pages, Some(10));
    }
}

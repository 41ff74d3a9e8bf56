//! The admin API surface the application talks to

use backoffice_core::{
    Blog, ContactLead, Faq, LeadStats, LeadStatus, ListPage, RecordId, Resource, Service,
    Testimonial,
};

use crate::body::FormPayload;
use crate::error::Error;

/// Query parameters for the lead list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadQuery {
    /// 1-based page number
    pub page: u32,
    pub limit: u32,
    pub status: Option<LeadStatus>,
    pub search: Option<String>,
}

impl Default for LeadQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            status: None,
            search: None,
        }
    }
}

impl LeadQuery {
    /// Query-string pairs; empty filters are omitted
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.max(1).to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                pairs.push(("search", search.to_string()));
            }
        }
        pairs
    }
}

/// Admin backend operations.
///
/// Implemented over HTTP by [`crate::AdminClient`]; tests substitute an
/// in-memory implementation. List fetches are typed per resource while
/// create/update/delete are keyed on [`Resource`].
#[trait_variant::make(AdminApi: Send)]
pub trait LocalAdminApi {
    async fn list_leads(&self, query: LeadQuery) -> Result<ListPage<ContactLead>, Error>;

    async fn lead_stats(&self) -> Result<LeadStats, Error>;

    async fn set_lead_status(&self, id: RecordId, status: LeadStatus) -> Result<(), Error>;

    async fn list_blogs(&self) -> Result<ListPage<Blog>, Error>;

    /// Full record, used to seed the edit form
    async fn get_blog(&self, id: RecordId) -> Result<Blog, Error>;

    async fn list_services(&self) -> Result<ListPage<Service>, Error>;

    async fn toggle_service(&self, id: RecordId) -> Result<(), Error>;

    async fn list_faqs(&self, search: Option<String>) -> Result<ListPage<Faq>, Error>;

    /// Delete several FAQs in one request
    async fn delete_faqs(&self, ids: Vec<RecordId>) -> Result<(), Error>;

    async fn list_testimonials(&self) -> Result<ListPage<Testimonial>, Error>;

    async fn create(&self, resource: Resource, payload: FormPayload) -> Result<(), Error>;

    async fn update(
        &self,
        resource: Resource,
        id: RecordId,
        payload: FormPayload,
    ) -> Result<(), Error>;

    async fn delete(&self, resource: Resource, id: RecordId) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_query_omits_empty_filters() {
        let pairs = LeadQuery::default().to_pairs();
        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn lead_query_includes_status_and_trimmed_search() {
        let query = LeadQuery {
            page: 2,
            limit: 25,
            status: Some(LeadStatus::Contacted),
            search: Some("  acme ".to_string()),
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("status", "contacted".to_string())));
        assert!(pairs.contains(&("search", "acme".to_string())));
        assert!(pairs.contains(&("page", "2".to_string())));
    }

    #[test]
    fn lead_query_blank_search_is_dropped() {
        let query = LeadQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!query.to_pairs().iter().any(|(k, _)| *k == "search"));
    }
}

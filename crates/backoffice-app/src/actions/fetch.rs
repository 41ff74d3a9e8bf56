//! List fetches

use backoffice_client::AdminApi;
use tracing::{debug, warn};

use crate::handler::ListRequest;
use crate::page::RecordPage;

/// Fetch the rows a [`ListRequest`] describes
pub async fn fetch_list<A>(api: &A, request: ListRequest) -> Result<RecordPage, String>
where
    A: AdminApi + Sync,
{
    let resource = request.resource();
    let result = match request {
        ListRequest::Leads(query) => api.list_leads(query).await.map(RecordPage::Leads),
        ListRequest::Blogs => api.list_blogs().await.map(RecordPage::Blogs),
        ListRequest::Services => api.list_services().await.map(RecordPage::Services),
        ListRequest::Faqs { search } => api.list_faqs(search).await.map(RecordPage::Faqs),
        ListRequest::Testimonials => api.list_testimonials().await.map(RecordPage::Testimonials),
    };

    match result {
        Ok(page) => {
            debug!("Fetched {} rows", resource);
            Ok(page)
        }
        Err(e) => {
            warn!("Failed to fetch {}: {}", resource, e);
            Err(e.to_string())
        }
    }
}

//! Headless mode - dump one resource list as JSON
//!
//! `backoffice --dump faqs` fetches the first page of a resource and prints
//! it to stdout as a single JSON document, without starting the terminal UI.
//!
//! # Example Output
//!
//! ```json
//! {"resource":"leads","fetched_at":"2024-05-01T09:00:00Z","total":42,"total_pages":5,
//!  "stats":{"new":4,"contacted":2,"resolved":30,"archived":6,"total":42},"items":[...]}
//! ```

use std::io::{self, Write};

use backoffice_app::actions::fetch::fetch_list;
use backoffice_app::config::Settings;
use backoffice_app::page::RecordPage;
use backoffice_app::ListRequest;
use backoffice_client::{AdminApi, AdminClient};
use backoffice_core::prelude::*;
use backoffice_core::{gallery, LeadStats, ListPage, Resource};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Dump<'a, T: Serialize> {
    resource: Resource,
    fetched_at: DateTime<Utc>,
    total: Option<u64>,
    total_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<LeadStats>,
    items: &'a [T],
}

/// Serialize a fetched page
fn to_json(
    page: &RecordPage,
    stats: Option<LeadStats>,
    fetched_at: DateTime<Utc>,
) -> Result<String> {
    fn render<T: Serialize>(
        resource: Resource,
        page: &ListPage<T>,
        stats: Option<LeadStats>,
        fetched_at: DateTime<Utc>,
    ) -> Result<String> {
        let dump = Dump {
            resource,
            fetched_at,
            total: page.total,
            total_pages: page.total_pages,
            stats,
            items: &page.items,
        };
        serde_json::to_string_pretty(&dump)
            .with_context(|| format!("Failed to serialize {} dump", resource))
    }

    let resource = page.resource();
    match page {
        RecordPage::Leads(p) => render(resource, p, stats, fetched_at),
        RecordPage::Blogs(p) => render(resource, p, stats, fetched_at),
        RecordPage::Services(p) => render(resource, p, stats, fetched_at),
        RecordPage::Faqs(p) => render(resource, p, stats, fetched_at),
        RecordPage::Galleries(p) => render(resource, p, stats, fetched_at),
        RecordPage::Testimonials(p) => render(resource, p, stats, fetched_at),
    }
}

/// Fetch the first page of `resource`, plus stats for leads
async fn fetch<A>(api: &A, resource: Resource, page_size: u32) -> Result<(RecordPage, Option<LeadStats>)>
where
    A: AdminApi + Sync,
{
    let page = match ListRequest::first_page(resource, page_size) {
        Some(request) => fetch_list(api, request).await.map_err(Error::api)?,
        None => RecordPage::Galleries(ListPage::new(gallery::demo_items())),
    };

    let stats = if resource == Resource::Leads {
        Some(api.lead_stats().await.map_err(|e| Error::api(e.to_string()))?)
    } else {
        None
    };

    Ok((page, stats))
}

/// Run headless: print one resource list and exit
pub async fn run(settings: &Settings, resource: Resource) -> Result<()> {
    let client = AdminClient::builder(settings.api.base_url.clone())
        .timeout(settings.api.timeout())
        .retry(settings.retry.policy())
        .build()
        .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

    info!("Dumping {} from {}", resource, client.base_url());
    let (page, stats) = fetch(&client, resource, settings.behavior.page_size).await?;
    let json = to_json(&page, stats, Utc::now())?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)
        .and_then(|()| stdout.flush())
        .context("Failed to write dump to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_core::Faq;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_faq_dump_has_items_and_no_stats() {
        let page = RecordPage::Faqs(ListPage::new(vec![Faq {
            id: 1,
            question: "Q1".to_string(),
            answer: "A1".to_string(),
        }]));
        let json = to_json(&page, None, at()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["resource"], "faqs");
        assert_eq!(value["items"][0]["question"], "Q1");
        assert!(value.get("stats").is_none());
        assert!(value["total"].is_null());
    }

    #[test]
    fn test_lead_dump_includes_stats_and_totals() {
        let page = RecordPage::Leads(ListPage::new(Vec::new()).with_totals(Some(42), Some(5)));
        let stats = LeadStats {
            new: 4,
            contacted: 2,
            resolved: 30,
            archived: 6,
            total: 42,
        };
        let json = to_json(&page, Some(stats), at()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["resource"], "leads");
        assert_eq!(value["total_pages"], 5);
        assert_eq!(value["stats"]["resolved"], 30);
        assert_eq!(value["fetched_at"], "2024-05-01T09:00:00Z");
    }

    #[test]
    fn test_gallery_dump_uses_local_rows() {
        let page = RecordPage::Galleries(ListPage::new(gallery::demo_items()));
        let json = to_json(&page, None, at()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["resource"], "galleries");
        assert_eq!(value["items"].as_array().map(Vec::len), Some(4));
    }
}

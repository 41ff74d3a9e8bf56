//! # backoffice-client - Admin API Client
//!
//! Typed HTTP client for the content-management backend behind Backoffice.
//!
//! # Quick Start
//!
//! ```no_run
//! use backoffice_client::{AdminApi, AdminClient, LeadQuery};
//!
//! # async fn example() -> Result<(), backoffice_client::Error> {
//! let client = AdminClient::new("http://localhost:5000")?;
//!
//! let leads = client.list_leads(LeadQuery::default()).await?;
//! println!("{} leads on this page", leads.len());
//!
//! let stats = client.lead_stats().await?;
//! println!("{} new of {}", stats.new, stats.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - One typed method per list endpoint, resource-keyed create/update/delete
//! - Envelope normalisation (`{data, total}`, `{success, data}`, `{status, data}`, bare arrays)
//! - JSON or multipart bodies chosen by whether a file is attached
//! - Exponential backoff on the services list
//! - Settle-all bulk fan-out with per-id outcomes

mod api;
mod body;
pub mod bulk;
mod envelope;
mod error;
mod retry;
pub mod routes;

pub use api::{AdminApi, LeadQuery, LocalAdminApi};
pub use body::{Attachment, FormPayload, RequestBody};
pub use bulk::BulkOutcome;
pub use envelope::{check_ack, decode_list, decode_one};
pub use error::Error;
pub use retry::RetryPolicy;

use std::time::Duration;

use backoffice_core::{
    Blog, ContactLead, Faq, LeadStats, LeadStatus, ListPage, RecordId, Resource, Service,
    StatusCount, Testimonial,
};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the admin backend.
#[derive(Debug, Clone)]
pub struct AdminClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

/// Builder for configuring an [`AdminClient`].
#[derive(Debug)]
pub struct AdminClientBuilder {
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
    client: Option<Client>,
}

impl AdminClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
            client: None,
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry schedule used by the services list.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Use a custom reqwest Client.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AdminClient, Error> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::Configuration(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        let client = match self.client {
            Some(c) => c,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Configuration(e.to_string()))?,
        };

        Ok(AdminClient {
            client,
            base_url: self.base_url,
            retry: self.retry,
        })
    }
}

impl AdminClient {
    /// Create a client with default timeout and retry policy.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        AdminClientBuilder::new(base_url).build()
    }

    /// Create a builder for advanced configuration.
    pub fn builder(base_url: impl Into<String>) -> AdminClientBuilder {
        AdminClientBuilder::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    /// Send a request and return the parsed JSON body.
    ///
    /// Non-2xx statuses become [`Error::Http`] with the message from the body
    /// when there is one. An empty 2xx body is `Value::Null`.
    async fn send(&self, req: RequestBuilder) -> Result<Value, Error> {
        let response = req
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| envelope::error_message(&body))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| Error::Deserialization(e.to_string()))
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, Error> {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    /// Send a form payload, as JSON or multipart
    async fn send_payload(
        &self,
        method: Method,
        path: &str,
        payload: FormPayload,
    ) -> Result<(), Error> {
        let body = payload.into_body().await?;
        let req = body.apply(self.request(method, path));
        let response = self.send(req).await?;
        check_ack(&response)
    }

    async fn send_json(&self, method: Method, path: &str, json: &Value) -> Result<(), Error> {
        let response = self.send(self.request(method, path).json(json)).await?;
        check_ack(&response)
    }

    async fn send_empty(&self, method: Method, path: &str) -> Result<(), Error> {
        let response = self.send(self.request(method, path)).await?;
        check_ack(&response)
    }

    async fn fetch_list<T>(&self, resource: Resource, query: &[(&str, String)]) -> Result<ListPage<T>, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let path = resource
            .base_path()
            .ok_or_else(|| Error::unsupported(resource, "list"))?;
        let page = decode_list(self.get(path, query).await?)?;
        tracing::debug!("Fetched {} {} row(s)", page.len(), resource.label());
        Ok(page)
    }
}

impl AdminApi for AdminClient {
    // =========================================================================
    // Leads
    // =========================================================================

    async fn list_leads(&self, query: LeadQuery) -> Result<ListPage<ContactLead>, Error> {
        self.fetch_list(Resource::Leads, &query.to_pairs()).await
    }

    async fn lead_stats(&self) -> Result<LeadStats, Error> {
        let counts: Vec<StatusCount> = decode_list(self.get(routes::LEAD_STATS, &[]).await?)?.items;
        Ok(LeadStats::from_counts(&counts))
    }

    async fn set_lead_status(&self, id: RecordId, status: LeadStatus) -> Result<(), Error> {
        self.send_json(
            Method::PATCH,
            &routes::lead_status(id),
            &serde_json::json!({ "status": status.as_str() }),
        )
        .await
    }

    // =========================================================================
    // Blogs
    // =========================================================================

    async fn list_blogs(&self) -> Result<ListPage<Blog>, Error> {
        self.fetch_list(Resource::Blogs, &[]).await
    }

    async fn get_blog(&self, id: RecordId) -> Result<Blog, Error> {
        decode_one(self.get(&routes::blog(id), &[]).await?)
    }

    // =========================================================================
    // Services
    // =========================================================================

    async fn list_services(&self) -> Result<ListPage<Service>, Error> {
        self.retry
            .run("fetch services", || self.fetch_list(Resource::Services, &[]))
            .await
    }

    async fn toggle_service(&self, id: RecordId) -> Result<(), Error> {
        self.send_empty(Method::PATCH, &routes::service_toggle(id))
            .await
    }

    // =========================================================================
    // FAQs
    // =========================================================================

    async fn list_faqs(&self, search: Option<String>) -> Result<ListPage<Faq>, Error> {
        let query: Vec<(&str, String)> = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| vec![("search", s)])
            .unwrap_or_default();
        self.fetch_list(Resource::Faqs, &query).await
    }

    async fn delete_faqs(&self, ids: Vec<RecordId>) -> Result<(), Error> {
        self.send_json(
            Method::POST,
            routes::FAQ_DELETE_MULTIPLE,
            &serde_json::json!({ "ids": ids }),
        )
        .await
    }

    // =========================================================================
    // Testimonials
    // =========================================================================

    async fn list_testimonials(&self) -> Result<ListPage<Testimonial>, Error> {
        self.fetch_list(Resource::Testimonials, &[]).await
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    async fn create(&self, resource: Resource, payload: FormPayload) -> Result<(), Error> {
        let path = routes::create(resource).ok_or_else(|| Error::unsupported(resource, "create"))?;
        self.send_payload(Method::POST, &path, payload).await
    }

    async fn update(
        &self,
        resource: Resource,
        id: RecordId,
        payload: FormPayload,
    ) -> Result<(), Error> {
        let path =
            routes::update(resource, id).ok_or_else(|| Error::unsupported(resource, "update"))?;
        self.send_payload(Method::PUT, &path, payload).await
    }

    async fn delete(&self, resource: Resource, id: RecordId) -> Result<(), Error> {
        let path =
            routes::delete(resource, id).ok_or_else(|| Error::unsupported(resource, "delete"))?;
        self.send_empty(Method::DELETE, &path).await
    }
}

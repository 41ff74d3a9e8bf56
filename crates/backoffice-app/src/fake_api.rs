//! In-memory admin backend for handler and action tests

use std::collections::HashSet;
use std::sync::Mutex;

use backoffice_client::{AdminApi, Error, FormPayload, LeadQuery};
use backoffice_core::{
    Blog, ContactLead, Faq, LeadStats, LeadStatus, ListPage, Record, RecordId, Resource, Service,
    StatusCount, Testimonial,
};

#[derive(Debug, Default)]
pub struct FakeData {
    pub leads: Vec<ContactLead>,
    pub blogs: Vec<Blog>,
    pub services: Vec<Service>,
    pub faqs: Vec<Faq>,
    pub testimonials: Vec<Testimonial>,
}

/// Backend whose records live in memory. Every call is logged as
/// `"METHOD target"` so tests can assert on the requests made.
#[derive(Debug, Default)]
pub struct FakeApi {
    pub data: Mutex<FakeData>,
    pub calls: Mutex<Vec<String>>,
    /// Ids whose mutations fail with a 404
    pub failing: Mutex<HashSet<RecordId>>,
    next_id: Mutex<RecordId>,
}

pub fn lead(id: RecordId, name: &str, status: LeadStatus) -> ContactLead {
    ContactLead {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        service_id: None,
        subject: None,
        message: "Hello".to_string(),
        status,
        created_at: None,
        updated_at: None,
    }
}

pub fn faq(id: RecordId, question: &str, answer: &str) -> Faq {
    Faq {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub fn service(id: RecordId, name: &str, is_active: bool) -> Service {
    Service {
        id,
        name: name.to_string(),
        image_url: None,
        is_active,
        created_at: None,
    }
}

pub fn blog(id: RecordId, title: &str) -> Blog {
    Blog {
        id,
        title: title.to_string(),
        author: "Editor".to_string(),
        publish_date: "2024-02-11".to_string(),
        tags: "news".to_string(),
        banner_image: Some(format!("/uploads/{}.png", id)),
        short_description: "Short".to_string(),
        full_content: "Full".to_string(),
        created_at: None,
    }
}

pub fn testimonial(id: RecordId, client_name: &str) -> Testimonial {
    Testimonial {
        id,
        comment: "Great work".to_string(),
        review_stars: 5,
        client_name: client_name.to_string(),
        client_position: None,
        client_company: None,
        image_url: Some(format!("/uploads/t{}.jpg", id)),
        is_active: true,
        display_order: None,
    }
}

fn not_found() -> Error {
    Error::Http {
        status: 404,
        message: "Not Found".to_string(),
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(100),
            ..Default::default()
        }
    }

    pub fn with_data(data: FakeData) -> Self {
        let api = Self::new();
        *api.data.lock().unwrap() = data;
        api
    }

    pub fn fail_on(&self, id: RecordId) {
        self.failing.lock().unwrap().insert(id);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn check(&self, id: RecordId) -> Result<(), Error> {
        if self.failing.lock().unwrap().contains(&id) {
            Err(not_found())
        } else {
            Ok(())
        }
    }

    fn allocate_id(&self) -> RecordId {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }
}

fn text(payload: &FormPayload, name: &str) -> String {
    payload.get_str(name).unwrap_or_default().to_string()
}

impl AdminApi for FakeApi {
    async fn list_leads(&self, query: LeadQuery) -> Result<ListPage<ContactLead>, Error> {
        self.record(format!("GET leads {:?}", query.to_pairs()));
        let data = self.data.lock().unwrap();
        let search = query.search.clone().unwrap_or_default();
        let matching: Vec<ContactLead> = data
            .leads
            .iter()
            .filter(|l| query.status.map_or(true, |s| l.status == s))
            .filter(|l| l.matches(&search))
            .cloned()
            .collect();

        let limit = query.limit.max(1) as usize;
        let total = matching.len() as u64;
        let total_pages = matching.len().div_ceil(limit).max(1) as u32;
        let start = (query.page.max(1) as usize - 1) * limit;
        let items = matching.into_iter().skip(start).take(limit).collect();
        Ok(ListPage::new(items).with_totals(Some(total), Some(total_pages)))
    }

    async fn lead_stats(&self) -> Result<LeadStats, Error> {
        self.record("GET leads/stats");
        let data = self.data.lock().unwrap();
        let counts: Vec<StatusCount> = LeadStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: status.as_str().to_string(),
                count: data.leads.iter().filter(|l| l.status == *status).count() as i64,
            })
            .collect();
        Ok(LeadStats::from_counts(&counts))
    }

    async fn set_lead_status(&self, id: RecordId, status: LeadStatus) -> Result<(), Error> {
        self.record(format!("PATCH leads/{} {}", id, status));
        self.check(id)?;
        let mut data = self.data.lock().unwrap();
        let lead = data.leads.iter_mut().find(|l| l.id == id).ok_or_else(not_found)?;
        lead.status = status;
        Ok(())
    }

    async fn list_blogs(&self) -> Result<ListPage<Blog>, Error> {
        self.record("GET blogs");
        Ok(ListPage::new(self.data.lock().unwrap().blogs.clone()))
    }

    async fn get_blog(&self, id: RecordId) -> Result<Blog, Error> {
        self.record(format!("GET blogs/{}", id));
        let data = self.data.lock().unwrap();
        data.blogs.iter().find(|b| b.id == id).cloned().ok_or_else(not_found)
    }

    async fn list_services(&self) -> Result<ListPage<Service>, Error> {
        self.record("GET services");
        Ok(ListPage::new(self.data.lock().unwrap().services.clone()))
    }

    async fn toggle_service(&self, id: RecordId) -> Result<(), Error> {
        self.record(format!("PATCH services/{}/toggle", id));
        self.check(id)?;
        let mut data = self.data.lock().unwrap();
        let service = data.services.iter_mut().find(|s| s.id == id).ok_or_else(not_found)?;
        service.is_active = !service.is_active;
        Ok(())
    }

    async fn list_faqs(&self, search: Option<String>) -> Result<ListPage<Faq>, Error> {
        self.record(format!("GET faqs {:?}", search));
        let data = self.data.lock().unwrap();
        let needle = search.unwrap_or_default();
        let items = data
            .faqs
            .iter()
            .filter(|f| f.matches(&needle))
            .cloned()
            .collect();
        Ok(ListPage::new(items))
    }

    async fn delete_faqs(&self, ids: Vec<RecordId>) -> Result<(), Error> {
        self.record(format!("POST faqs/delete-multiple {:?}", ids));
        for &id in &ids {
            self.check(id)?;
        }
        self.data.lock().unwrap().faqs.retain(|f| !ids.contains(&f.id));
        Ok(())
    }

    async fn list_testimonials(&self) -> Result<ListPage<Testimonial>, Error> {
        self.record("GET testimonials");
        Ok(ListPage::new(self.data.lock().unwrap().testimonials.clone()))
    }

    async fn create(&self, resource: Resource, payload: FormPayload) -> Result<(), Error> {
        self.record(format!(
            "POST {} multipart={}",
            resource.noun(),
            payload.has_attachment()
        ));
        let id = self.allocate_id();
        let mut data = self.data.lock().unwrap();
        match resource {
            Resource::Faqs => data
                .faqs
                .push(faq(id, &text(&payload, "qus"), &text(&payload, "answers"))),
            Resource::Services => data
                .services
                .push(service(id, &text(&payload, "name"), true)),
            Resource::Blogs => data.blogs.push(blog(id, &text(&payload, "title"))),
            _ => {}
        }
        Ok(())
    }

    async fn update(
        &self,
        resource: Resource,
        id: RecordId,
        payload: FormPayload,
    ) -> Result<(), Error> {
        self.record(format!(
            "PUT {}/{} multipart={}",
            resource.noun(),
            id,
            payload.has_attachment()
        ));
        self.check(id)?;
        let mut data = self.data.lock().unwrap();
        if resource == Resource::Faqs {
            let faq = data.faqs.iter_mut().find(|f| f.id == id).ok_or_else(not_found)?;
            faq.question = text(&payload, "qus");
            faq.answer = text(&payload, "answers");
        }
        Ok(())
    }

    async fn delete(&self, resource: Resource, id: RecordId) -> Result<(), Error> {
        self.record(format!("DELETE {}/{}", resource.noun(), id));
        self.check(id)?;
        let mut data = self.data.lock().unwrap();
        match resource {
            Resource::Blogs => data.blogs.retain(|b| b.id != id),
            Resource::Services => data.services.retain(|s| s.id != id),
            Resource::Faqs => data.faqs.retain(|f| f.id != id),
            Resource::Testimonials => data.testimonials.retain(|t| t.id != id),
            _ => {}
        }
        Ok(())
    }
}

//! Per-resource page view-models
//!
//! A page is constructed fresh every time it is navigated to and dropped when
//! the user leaves it.

use backoffice_core::{
    gallery, Blog, ContactLead, Faq, GalleryItem, LeadStats, LeadStatus, ListPage, RecordId,
    Resource, Service, Testimonial,
};

use crate::list_view::{ListView, RequestToken};

/// A fetched page of rows, tagged with its resource
#[derive(Debug, Clone)]
pub enum RecordPage {
    Leads(ListPage<ContactLead>),
    Blogs(ListPage<Blog>),
    Services(ListPage<Service>),
    Faqs(ListPage<Faq>),
    Galleries(ListPage<GalleryItem>),
    Testimonials(ListPage<Testimonial>),
}

impl RecordPage {
    pub fn resource(&self) -> Resource {
        match self {
            RecordPage::Leads(_) => Resource::Leads,
            RecordPage::Blogs(_) => Resource::Blogs,
            RecordPage::Services(_) => Resource::Services,
            RecordPage::Faqs(_) => Resource::Faqs,
            RecordPage::Galleries(_) => Resource::Galleries,
            RecordPage::Testimonials(_) => Resource::Testimonials,
        }
    }
}

/// Leads page: list, status filter and the stats summary
#[derive(Debug, Clone)]
pub struct LeadsPage {
    pub list: ListView<ContactLead>,
    pub stats: LeadStats,
    pub stats_pending: Option<RequestToken>,
    pub status_filter: Option<LeadStatus>,
    pub limit: u32,
}

impl LeadsPage {
    pub fn new(limit: u32) -> Self {
        Self {
            list: ListView::new(Resource::Leads.search_mode()),
            stats: LeadStats::default(),
            stats_pending: None,
            status_filter: None,
            limit,
        }
    }

    /// Cycle the filter: all → new → contacted → resolved → archived → all
    pub fn cycle_status_filter(&mut self) {
        self.status_filter = match self.status_filter {
            None => Some(LeadStatus::New),
            Some(LeadStatus::New) => Some(LeadStatus::Contacted),
            Some(LeadStatus::Contacted) => Some(LeadStatus::Resolved),
            Some(LeadStatus::Resolved) => Some(LeadStatus::Archived),
            Some(LeadStatus::Archived) => None,
        };
    }

    /// Apply a stats result if it carries the awaited token
    pub fn apply_stats(&mut self, token: RequestToken, result: Result<LeadStats, String>) -> bool {
        if self.stats_pending != Some(token) {
            return false;
        }
        self.stats_pending = None;
        match result {
            Ok(stats) => self.stats = stats,
            Err(e) => tracing::warn!("Failed to load lead stats: {}", e),
        }
        true
    }
}

/// View-model of the page currently on screen
#[derive(Debug, Clone)]
pub enum PageState {
    Leads(LeadsPage),
    Blogs(ListView<Blog>),
    Services(ListView<Service>),
    Faqs(ListView<Faq>),
    Galleries(ListView<GalleryItem>),
    Testimonials(ListView<Testimonial>),
}

/// Run `$body` with `$list` bound to the page's `ListView`, whatever its row type
macro_rules! with_list {
    ($page:expr, |$list:ident| $body:expr) => {
        match $page {
            PageState::Leads(leads) => {
                let $list = &leads.list;
                $body
            }
            PageState::Blogs($list) => $body,
            PageState::Services($list) => $body,
            PageState::Faqs($list) => $body,
            PageState::Galleries($list) => $body,
            PageState::Testimonials($list) => $body,
        }
    };
    (mut $page:expr, |$list:ident| $body:expr) => {
        match $page {
            PageState::Leads(leads) => {
                let $list = &mut leads.list;
                $body
            }
            PageState::Blogs($list) => $body,
            PageState::Services($list) => $body,
            PageState::Faqs($list) => $body,
            PageState::Galleries($list) => $body,
            PageState::Testimonials($list) => $body,
        }
    };
}

impl PageState {
    /// Fresh view-model for a resource. The gallery is seeded with its
    /// local demo rows.
    pub fn new(resource: Resource, page_size: u32) -> Self {
        let mode = resource.search_mode();
        match resource {
            Resource::Leads => PageState::Leads(LeadsPage::new(page_size)),
            Resource::Blogs => PageState::Blogs(ListView::new(mode)),
            Resource::Services => PageState::Services(ListView::new(mode)),
            Resource::Faqs => PageState::Faqs(ListView::new(mode)),
            Resource::Galleries => {
                let mut list = ListView::new(mode);
                list.replace_items(gallery::demo_items());
                PageState::Galleries(list)
            }
            Resource::Testimonials => PageState::Testimonials(ListView::new(mode)),
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            PageState::Leads(_) => Resource::Leads,
            PageState::Blogs(_) => Resource::Blogs,
            PageState::Services(_) => Resource::Services,
            PageState::Faqs(_) => Resource::Faqs,
            PageState::Galleries(_) => Resource::Galleries,
            PageState::Testimonials(_) => Resource::Testimonials,
        }
    }

    pub fn leads(&self) -> Option<&LeadsPage> {
        match self {
            PageState::Leads(leads) => Some(leads),
            _ => None,
        }
    }

    pub fn leads_mut(&mut self) -> Option<&mut LeadsPage> {
        match self {
            PageState::Leads(leads) => Some(leads),
            _ => None,
        }
    }

    /// Apply fetched rows. Returns `false` when the rows belong to another
    /// page or carry a stale token.
    pub fn apply(&mut self, token: RequestToken, result: Result<RecordPage, String>) -> bool {
        match (self, result) {
            (PageState::Leads(p), Ok(RecordPage::Leads(rows))) => p.list.apply(token, Ok(rows)),
            (PageState::Blogs(l), Ok(RecordPage::Blogs(rows))) => l.apply(token, Ok(rows)),
            (PageState::Services(l), Ok(RecordPage::Services(rows))) => l.apply(token, Ok(rows)),
            (PageState::Faqs(l), Ok(RecordPage::Faqs(rows))) => l.apply(token, Ok(rows)),
            (PageState::Galleries(l), Ok(RecordPage::Galleries(rows))) => l.apply(token, Ok(rows)),
            (PageState::Testimonials(l), Ok(RecordPage::Testimonials(rows))) => {
                l.apply(token, Ok(rows))
            }
            (page, Err(e)) => with_list!(mut page, |list| list.apply(token, Err(e))),
            (page, Ok(rows)) => {
                tracing::debug!(
                    "Dropping {} rows delivered to the {} page",
                    rows.resource(),
                    page.resource()
                );
                false
            }
        }
    }

    pub fn begin_fetch(&mut self, token: RequestToken) {
        with_list!(mut self, |list| list.begin_fetch(token))
    }

    pub fn pending(&self) -> Option<RequestToken> {
        with_list!(self, |list| list.pending)
    }

    pub fn is_loading(&self) -> bool {
        with_list!(self, |list| list.loading)
    }

    pub fn last_error(&self) -> Option<&str> {
        with_list!(self, |list| list.last_error.as_deref())
    }

    pub fn search_query(&self) -> &str {
        with_list!(self, |list| list.search.query.as_str())
    }

    pub fn search_input(&mut self, text: String) -> u64 {
        with_list!(mut self, |list| list.search.input(text))
    }

    pub fn is_search_current(&self, generation: u64) -> bool {
        with_list!(self, |list| list.search.is_current(generation))
    }

    /// Mark the current query as sent to the backend and go back to page 1
    pub fn commit_search(&mut self) {
        with_list!(mut self, |list| {
            list.search.applied = list.search.query.trim().to_string();
            list.page = 1;
        })
    }

    pub fn applied_search(&self) -> &str {
        with_list!(self, |list| list.search.applied.as_str())
    }

    pub fn page_number(&self) -> u32 {
        with_list!(self, |list| list.page)
    }

    pub fn total_pages(&self) -> Option<u32> {
        with_list!(self, |list| list.total_pages)
    }

    pub fn total(&self) -> Option<u64> {
        with_list!(self, |list| list.total)
    }

    /// Advance to the next page if there is one
    pub fn next_page(&mut self) -> bool {
        with_list!(mut self, |list| {
            if list.has_next_page() {
                list.page += 1;
                true
            } else {
                false
            }
        })
    }

    pub fn prev_page(&mut self) -> bool {
        with_list!(mut self, |list| {
            if list.has_prev_page() {
                list.page -= 1;
                true
            } else {
                false
            }
        })
    }

    pub fn visible_len(&self) -> usize {
        with_list!(self, |list| list.visible_len())
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        with_list!(self, |list| list.visible_ids())
    }

    pub fn cursor(&self) -> usize {
        with_list!(self, |list| list.cursor)
    }

    pub fn cursor_id(&self) -> Option<RecordId> {
        with_list!(self, |list| list.cursor_id())
    }

    pub fn move_cursor(&mut self, delta: isize) {
        with_list!(mut self, |list| list.move_cursor(delta))
    }

    pub fn cursor_to_start(&mut self) {
        with_list!(mut self, |list| list.cursor_to_start())
    }

    pub fn cursor_to_end(&mut self) {
        with_list!(mut self, |list| list.cursor_to_end())
    }

    pub fn clamp_cursor(&mut self) {
        with_list!(mut self, |list| list.clamp_cursor())
    }

    pub fn toggle_cursor_selection(&mut self) {
        with_list!(mut self, |list| list.toggle_cursor_selection())
    }

    pub fn toggle_select_all(&mut self) {
        with_list!(mut self, |list| list.toggle_select_all())
    }

    pub fn clear_selection(&mut self) {
        with_list!(mut self, |list| list.selection.clear())
    }

    pub fn selection_len(&self) -> usize {
        with_list!(self, |list| list.selection.len())
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        with_list!(self, |list| list.selection.contains(id))
    }

    pub fn target_ids(&self) -> Vec<RecordId> {
        with_list!(self, |list| list.target_ids())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_matches_resource() {
        for resource in Resource::ALL {
            assert_eq!(PageState::new(resource, 10).resource(), resource);
        }
    }

    #[test]
    fn test_gallery_page_is_seeded() {
        let page = PageState::new(Resource::Galleries, 10);
        assert!(page.visible_len() > 0);
        assert!(!page.is_loading());
    }

    #[test]
    fn test_rows_for_other_resource_are_dropped() {
        let mut page = PageState::new(Resource::Faqs, 10);
        page.begin_fetch(RequestToken(1));
        let applied = page.apply(RequestToken(1), Ok(RecordPage::Blogs(ListPage::default())));
        assert!(!applied);
        assert!(page.is_loading());
    }

    #[test]
    fn test_error_applies_to_any_page() {
        let mut page = PageState::new(Resource::Services, 10);
        page.begin_fetch(RequestToken(3));
        assert!(page.apply(RequestToken(3), Err("timeout".to_string())));
        assert_eq!(page.last_error(), Some("timeout"));
    }

    #[test]
    fn test_status_filter_cycles_back_to_all() {
        let mut leads = LeadsPage::new(10);
        for _ in 0..5 {
            leads.cycle_status_filter();
        }
        assert_eq!(leads.status_filter, None);
    }

    #[test]
    fn test_stale_stats_ignored() {
        let mut leads = LeadsPage::new(10);
        leads.stats_pending = Some(RequestToken(2));
        let stats = LeadStats {
            new: 1,
            total: 1,
            ..Default::default()
        };
        assert!(!leads.apply_stats(RequestToken(1), Ok(stats)));
        assert_eq!(leads.stats.total, 0);
        assert!(leads.apply_stats(RequestToken(2), Ok(stats)));
        assert_eq!(leads.stats.total, 1);
    }

    #[test]
    fn test_pagination_bounds() {
        let mut page = PageState::new(Resource::Leads, 10);
        assert!(!page.prev_page());
        assert!(!page.next_page());

        if let Some(leads) = page.leads_mut() {
            leads.list.total_pages = Some(2);
        }
        assert!(page.next_page());
        assert_eq!(page.page_number(), 2);
        assert!(!page.next_page());
    }
}

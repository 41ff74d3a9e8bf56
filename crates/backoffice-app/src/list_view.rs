//! Generic list view-model shared by every resource page

use std::fmt;

use backoffice_core::{ListPage, Record, RecordId, SearchMode};

use crate::selection::Selection;

/// Sequence number stamped on a request. Only the response carrying a view's
/// current token is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Search box state with a debounce generation counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Current text in the search box
    pub query: String,
    /// Bumped on every keystroke; a debounce timer carrying an older
    /// generation is ignored
    pub generation: u64,
    /// Term last sent to the backend (server-search resources)
    pub applied: String,
}

impl SearchState {
    /// Record a keystroke and return the new generation
    pub fn input(&mut self, text: String) -> u64 {
        self.query = text;
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Rows, pagination and selection for one resource page
#[derive(Debug, Clone)]
pub struct ListView<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub pending: Option<RequestToken>,
    /// 1-based page number
    pub page: u32,
    pub total: Option<u64>,
    pub total_pages: Option<u32>,
    pub search: SearchState,
    pub search_mode: SearchMode,
    pub selection: Selection,
    /// Highlighted row within the visible rows
    pub cursor: usize,
    /// Error from the last failed fetch; the previous rows stay visible
    pub last_error: Option<String>,
}

impl<T: Record> ListView<T> {
    pub fn new(search_mode: SearchMode) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            pending: None,
            page: 1,
            total: None,
            total_pages: None,
            search: SearchState::default(),
            search_mode,
            selection: Selection::new(),
            cursor: 0,
            last_error: None,
        }
    }

    /// Mark a fetch as in flight. Any earlier in-flight token is superseded.
    pub fn begin_fetch(&mut self, token: RequestToken) {
        self.loading = true;
        self.pending = Some(token);
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when the
    /// token is not the one currently awaited.
    pub fn apply(&mut self, token: RequestToken, result: Result<ListPage<T>, String>) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        self.loading = false;

        match result {
            Ok(page) => {
                self.items = page.items;
                if page.total.is_some() {
                    self.total = page.total;
                }
                if page.total_pages.is_some() {
                    self.total_pages = page.total_pages;
                }
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e);
            }
        }
        self.clamp_cursor();
        true
    }

    /// Replace rows directly (local-only resources)
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.pending = None;
        self.last_error = None;
        self.clamp_cursor();
    }

    /// Rows after client-side search. Server-search lists show every row.
    pub fn visible(&self) -> Vec<&T> {
        match self.search_mode {
            SearchMode::Server => self.items.iter().collect(),
            SearchMode::Client => self
                .items
                .iter()
                .filter(|item| item.matches(&self.search.query))
                .collect(),
        }
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible().iter().map(|item| item.id()).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    pub fn cursor_item(&self) -> Option<&T> {
        self.visible().get(self.cursor).copied()
    }

    pub fn cursor_id(&self) -> Option<RecordId> {
        self.cursor_item().map(Record::id)
    }

    pub fn find(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor = self.visible_len().saturating_sub(1);
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn toggle_cursor_selection(&mut self) {
        if let Some(id) = self.cursor_id() {
            self.selection.toggle(id);
        }
    }

    pub fn toggle_select_all(&mut self) {
        let visible = self.visible_ids();
        self.selection.toggle_all(&visible);
    }

    /// Ids a bulk action applies to: the selection if any, else the cursor row
    pub fn target_ids(&self) -> Vec<RecordId> {
        if self.selection.is_empty() {
            self.cursor_id().into_iter().collect()
        } else {
            self.selection.ids()
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.total_pages.is_some_and(|pages| self.page < pages)
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_core::Faq;

    fn faq(id: RecordId, question: &str) -> Faq {
        Faq {
            id,
            question: question.to_string(),
            answer: String::new(),
        }
    }

    fn loaded(mode: SearchMode, items: Vec<Faq>) -> ListView<Faq> {
        let mut view = ListView::new(mode);
        view.begin_fetch(RequestToken(1));
        assert!(view.apply(RequestToken(1), Ok(ListPage::new(items))));
        view
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut view: ListView<Faq> = ListView::new(SearchMode::Server);
        view.begin_fetch(RequestToken(1));
        view.begin_fetch(RequestToken(2));

        assert!(!view.apply(RequestToken(1), Ok(ListPage::new(vec![faq(1, "old")]))));
        assert!(view.items.is_empty());
        assert!(view.loading);

        assert!(view.apply(RequestToken(2), Ok(ListPage::new(vec![faq(2, "new")]))));
        assert_eq!(view.items[0].question, "new");
        assert!(!view.loading);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_rows() {
        let mut view = loaded(SearchMode::Server, vec![faq(1, "Q1")]);
        view.begin_fetch(RequestToken(2));
        view.apply(RequestToken(2), Err("HTTP 500".to_string()));

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.last_error.as_deref(), Some("HTTP 500"));
        assert!(!view.loading);
    }

    #[test]
    fn test_totals_only_update_when_present() {
        let mut view: ListView<Faq> = ListView::new(SearchMode::Server);
        view.begin_fetch(RequestToken(1));
        view.apply(
            RequestToken(1),
            Ok(ListPage::new(vec![]).with_totals(Some(30), Some(3))),
        );
        view.begin_fetch(RequestToken(2));
        view.apply(RequestToken(2), Ok(ListPage::new(vec![])));
        assert_eq!(view.total, Some(30));
        assert_eq!(view.total_pages, Some(3));
        assert!(view.has_next_page());
    }

    #[test]
    fn test_client_search_filters_visible_rows() {
        let mut view = loaded(
            SearchMode::Client,
            vec![faq(1, "Refunds"), faq(2, "Shipping"), faq(3, "Refund window")],
        );
        view.search.query = "refund".to_string();
        assert_eq!(view.visible_ids(), vec![1, 3]);
    }

    #[test]
    fn test_cursor_clamped_after_refresh() {
        let mut view = loaded(SearchMode::Server, vec![faq(1, "a"), faq(2, "b"), faq(3, "c")]);
        view.cursor_to_end();
        assert_eq!(view.cursor, 2);

        view.begin_fetch(RequestToken(5));
        view.apply(RequestToken(5), Ok(ListPage::new(vec![faq(1, "a")])));
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn test_cursor_movement_bounds() {
        let mut view = loaded(SearchMode::Server, vec![faq(1, "a"), faq(2, "b")]);
        view.move_cursor(-3);
        assert_eq!(view.cursor, 0);
        view.move_cursor(10);
        assert_eq!(view.cursor, 1);
        assert_eq!(view.cursor_id(), Some(2));
    }

    #[test]
    fn test_target_ids_prefers_selection() {
        let mut view = loaded(SearchMode::Server, vec![faq(1, "a"), faq(2, "b")]);
        assert_eq!(view.target_ids(), vec![1]);

        view.selection.toggle(2);
        assert_eq!(view.target_ids(), vec![2]);
    }

    #[test]
    fn test_search_generation_advances() {
        let mut search = SearchState::default();
        let first = search.input("a".to_string());
        let second = search.input("ab".to_string());
        assert!(second > first);
        assert!(!search.is_current(first));
        assert!(search.is_current(second));
    }
}

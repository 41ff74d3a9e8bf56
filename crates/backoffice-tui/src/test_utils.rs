//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames are rendered into ratatui's `TestBackend` and
//! asserted on as text.

use backoffice_app::list_view::RequestToken;
use backoffice_app::page::{PageState, RecordPage};
use backoffice_app::state::AppState;
use backoffice_core::{ContactLead, Faq, LeadStatus, ListPage, Service};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 30;

/// Narrow terminal (sidebar hidden)
pub const COMPACT_WIDTH: u16 = 60;
pub const COMPACT_HEIGHT: u16 = 20;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame (e.g. `render::view`)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        let buffer = self.buffer();
        if line >= buffer.area.height {
            return false;
        }
        let content: String = (0..buffer.area.width)
            .map(|x| buffer[(x, line)].symbol())
            .collect();
        content.contains(text)
    }

    /// All content as one string, rows separated by newlines
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let mut result = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                result.push_str(buffer[(x, y)].symbol());
            }
            result.push('\n');
        }
        result
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

pub fn test_lead(id: i64, name: &str, status: LeadStatus) -> ContactLead {
    ContactLead {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        service_id: None,
        subject: Some("Quote request".to_string()),
        message: "Please call back".to_string(),
        status,
        created_at: None,
        updated_at: None,
    }
}

pub fn test_faq(id: i64, question: &str) -> Faq {
    Faq {
        id,
        question: question.to_string(),
        answer: "Answer".to_string(),
    }
}

pub fn test_service(id: i64, name: &str, is_active: bool) -> Service {
    Service {
        id,
        name: name.to_string(),
        image_url: Some(format!("/uploads/{}.png", id)),
        is_active,
        created_at: None,
    }
}

/// AppState showing `rows` on their resource page
pub fn state_with_rows(rows: RecordPage) -> AppState {
    let mut state = AppState::new();
    state.page = PageState::new(rows.resource(), state.settings.behavior.page_size);
    let token = RequestToken(1);
    state.page.begin_fetch(token);
    state.page.apply(token, Ok(rows));
    state
}

/// Leads page with the given rows and matching stats
pub fn leads_state(leads: Vec<ContactLead>) -> AppState {
    let total = leads.len() as u64;
    let mut state = state_with_rows(RecordPage::Leads(
        ListPage::new(leads.clone()).with_totals(Some(total), Some(1)),
    ));
    if let Some(page) = state.page.leads_mut() {
        for lead in &leads {
            match lead.status {
                LeadStatus::New => page.stats.new += 1,
                LeadStatus::Contacted => page.stats.contacted += 1,
                LeadStatus::Resolved => page.stats.resolved += 1,
                LeadStatus::Archived => page.stats.archived += 1,
            }
        }
        page.stats.total = total;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area().width, TEST_WIDTH);
        assert_eq!(TestTerminal::compact().area().height, COMPACT_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Hello World"), term.area());
        assert!(term.buffer_contains("Hello World"));
        assert!(term.line_contains(0, "Hello"));
        assert!(!term.line_contains(1, "Hello"));
    }

    #[test]
    fn test_state_with_rows_applies_page() {
        let state = state_with_rows(RecordPage::Faqs(ListPage::new(vec![test_faq(1, "Q")])));
        assert_eq!(state.page.visible_ids(), vec![1]);
        assert!(!state.page.is_loading());
    }
}

//! Full-frame rendering tests for `view`

use super::view;
use crate::test_utils::{
    leads_state, state_with_rows, test_faq, test_lead, test_service, TestTerminal,
};
use backoffice_app::handler::update;
use backoffice_app::message::Message;
use backoffice_app::page::RecordPage;
use backoffice_app::state::AppState;
use backoffice_core::{LeadStatus, ListPage, Resource};

fn draw(term: &mut TestTerminal, state: &AppState) {
    term.draw_with(|frame| view(frame, state));
}

#[test]
fn test_leads_page_shows_stats_and_badges() {
    let mut term = TestTerminal::new();
    let state = leads_state(vec![
        test_lead(5, "Ada", LeadStatus::Archived),
        test_lead(6, "Bo", LeadStatus::New),
    ]);
    draw(&mut term, &state);

    assert!(term.buffer_contains("All 2"));
    assert!(term.buffer_contains("New 1"));
    assert!(term.buffer_contains("Archived 1"));
    assert!(term.buffer_contains("ada@example.com"));
    assert!(term.buffer_contains("Page 1/1 · 2 total"));
}

#[test]
fn test_faq_page_renders_row() {
    let mut term = TestTerminal::new();
    let state = state_with_rows(RecordPage::Faqs(ListPage::new(vec![test_faq(1, "Q1")])));
    draw(&mut term, &state);

    assert!(term.buffer_contains(" FAQs "));
    assert!(term.buffer_contains("Q1"));
    assert!(!term.buffer_contains("All 0"), "stats strip is leads-only");
}

#[test]
fn test_gallery_shows_local_rows() {
    let mut term = TestTerminal::new();
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Resource::Galleries));
    draw(&mut term, &state);

    assert!(term.buffer_contains("Audit team on site"));
    assert!(term.buffer_contains("4 rows"));
}

#[test]
fn test_sidebar_hidden_on_compact_terminal() {
    let state = state_with_rows(RecordPage::Faqs(ListPage::new(vec![test_faq(1, "Q1")])));

    let mut wide = TestTerminal::new();
    draw(&mut wide, &state);
    assert!(wide.buffer_contains("INBOX"));

    let mut compact = TestTerminal::compact();
    draw(&mut compact, &state);
    assert!(!compact.buffer_contains("INBOX"));
    assert!(compact.buffer_contains("Q1"));
}

#[test]
fn test_collapsed_sidebar() {
    let mut term = TestTerminal::new();
    let mut state = state_with_rows(RecordPage::Faqs(ListPage::new(vec![test_faq(1, "Q1")])));
    update(&mut state, Message::ToggleSidebar);
    draw(&mut term, &state);

    assert!(!term.buffer_contains("INBOX"));
}

#[test]
fn test_status_filter_in_title() {
    let mut term = TestTerminal::new();
    let mut state = leads_state(vec![test_lead(1, "Ada", LeadStatus::New)]);
    if let Some(leads) = state.page.leads_mut() {
        leads.status_filter = Some(LeadStatus::Contacted);
    }
    draw(&mut term, &state);

    assert!(term.buffer_contains("Leads · Contacted"));
}

#[test]
fn test_search_mode_shows_query() {
    let mut term = TestTerminal::new();
    let mut state = state_with_rows(RecordPage::Services(ListPage::new(vec![
        test_service(1, "ISO 9001", true),
        test_service(2, "ISO 14001", false),
    ])));
    update(&mut state, Message::StartSearch);
    update(
        &mut state,
        Message::SearchInput {
            text: "14001".to_string(),
        },
    );
    draw(&mut term, &state);

    assert!(term.buffer_contains("/ 14001_"));
    assert!(term.buffer_contains("ISO 14001"));
    assert!(!term.buffer_contains("ISO 9001"));
}

#[test]
fn test_server_search_pending_until_debounced() {
    let mut term = TestTerminal::new();
    let mut state = state_with_rows(RecordPage::Faqs(ListPage::new(vec![test_faq(1, "Q1")])));
    update(&mut state, Message::StartSearch);
    update(
        &mut state,
        Message::SearchInput {
            text: "iso".to_string(),
        },
    );
    draw(&mut term, &state);

    assert!(term.buffer_contains("searching…"));
}

#[test]
fn test_form_overlay() {
    let mut term = TestTerminal::new();
    let mut state = state_with_rows(RecordPage::Faqs(ListPage::new(vec![test_faq(1, "Q1")])));
    update(&mut state, Message::OpenCreateForm);
    draw(&mut term, &state);

    assert!(term.buffer_contains("New FAQ"));
    assert!(term.buffer_contains("Question *"));
}

#[test]
fn test_delete_confirmation_overlay() {
    let mut term = TestTerminal::new();
    let mut state = state_with_rows(RecordPage::Faqs(ListPage::new(vec![test_faq(1, "Q1")])));
    update(&mut state, Message::RequestDelete);
    draw(&mut term, &state);

    assert!(term.buffer_contains("Confirm delete"));
    assert!(term.buffer_contains("Delete FAQ #1?"));
}

#[test]
fn test_status_dialog_overlay() {
    let mut term = TestTerminal::new();
    let mut state = leads_state(vec![test_lead(5, "Ada", LeadStatus::New)]);
    update(&mut state, Message::OpenStatusDialog);
    draw(&mut term, &state);

    assert!(term.buffer_contains("Set lead status"));
    assert!(term.buffer_contains("Lead #5"));
}

#[test]
fn test_alert_drawn_on_top() {
    let mut term = TestTerminal::new();
    let mut state = state_with_rows(RecordPage::Faqs(ListPage::new(vec![test_faq(1, "Q1")])));
    update(&mut state, Message::OpenCreateForm);
    state.show_alert("Delete failed", "HTTP 500: boom");
    draw(&mut term, &state);

    assert!(term.buffer_contains("Delete failed"));
    assert!(term.buffer_contains("HTTP 500: boom"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut term = TestTerminal::with_size(20, 6);
    let mut state = leads_state(vec![test_lead(1, "Ada", LeadStatus::New)]);
    update(&mut state, Message::OpenStatusDialog);
    draw(&mut term, &state);
}

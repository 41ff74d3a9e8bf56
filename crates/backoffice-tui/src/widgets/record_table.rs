//! Record tables
//!
//! One generic table widget renders every resource list. Each record type
//! describes its own columns through [`TableRow`].

use backoffice_app::list_view::ListView;
use backoffice_core::{Blog, ContactLead, Faq, GalleryItem, Record, Service, Testimonial};
use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    text::Span,
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

/// Column layout of a record type
pub trait TableRow: Record {
    fn headers() -> &'static [&'static str];

    fn widths() -> Vec<Constraint>;

    fn cells(&self) -> Vec<Cell<'static>>;
}

/// Collapse whitespace and cut `text` to `max_width` display columns,
/// marking the cut with an ellipsis
pub fn excerpt(text: &str, max_width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.width() <= max_width {
        return flat;
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in flat.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn active_badge(active: bool) -> Cell<'static> {
    let label = if active { "Active" } else { "Inactive" };
    Cell::from(Span::styled(label, styles::active_flag(active)))
}

fn opt(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "-".to_string())
}

impl TableRow for ContactLead {
    fn headers() -> &'static [&'static str] {
        &["Name", "Email", "Subject", "Status", "Received"]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(3),
            Constraint::Length(10),
            Constraint::Length(10),
        ]
    }

    fn cells(&self) -> Vec<Cell<'static>> {
        let subject = self
            .subject
            .clone()
            .unwrap_or_else(|| excerpt(&self.message, 40));
        vec![
            Cell::from(self.name.clone()),
            Cell::from(self.email.clone()),
            Cell::from(subject),
            Cell::from(Span::styled(
                self.status.label(),
                styles::lead_status(self.status),
            )),
            Cell::from(date(self.created_at.as_ref())),
        ]
    }
}

impl TableRow for Blog {
    fn headers() -> &'static [&'static str] {
        &["Title", "Author", "Published", "Tags"]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Fill(3),
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Fill(2),
        ]
    }

    fn cells(&self) -> Vec<Cell<'static>> {
        vec![
            Cell::from(self.title.clone()),
            Cell::from(self.author.clone()),
            Cell::from(self.publish_date.clone()),
            Cell::from(Span::styled(
                self.tag_list().join(", "),
                styles::text_secondary(),
            )),
        ]
    }
}

impl TableRow for Service {
    fn headers() -> &'static [&'static str] {
        &["Name", "Image", "Status"]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(9),
        ]
    }

    fn cells(&self) -> Vec<Cell<'static>> {
        vec![
            Cell::from(self.name.clone()),
            Cell::from(Span::styled(
                opt(self.image_url.as_ref()),
                styles::text_muted(),
            )),
            active_badge(self.is_active),
        ]
    }
}

impl TableRow for Faq {
    fn headers() -> &'static [&'static str] {
        &["Question", "Answer"]
    }

    fn widths() -> Vec<Constraint> {
        vec![Constraint::Fill(1), Constraint::Fill(1)]
    }

    fn cells(&self) -> Vec<Cell<'static>> {
        vec![
            Cell::from(self.question.clone()),
            Cell::from(Span::styled(
                excerpt(&self.answer, 60),
                styles::text_secondary(),
            )),
        ]
    }
}

impl TableRow for GalleryItem {
    fn headers() -> &'static [&'static str] {
        &["Title", "Image", "Added"]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(10),
        ]
    }

    fn cells(&self) -> Vec<Cell<'static>> {
        vec![
            Cell::from(self.title.clone()),
            Cell::from(Span::styled(self.image.clone(), styles::text_muted())),
            Cell::from(date(Some(&self.created_at))),
        ]
    }
}

impl TableRow for Testimonial {
    fn headers() -> &'static [&'static str] {
        &["Client", "Company", "Rating", "Order", "Status"]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Length(9),
        ]
    }

    fn cells(&self) -> Vec<Cell<'static>> {
        let order = self
            .display_order
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        vec![
            Cell::from(self.client_name.clone()),
            Cell::from(opt(self.client_company.as_ref())),
            Cell::from(Span::styled(self.star_string(), styles::status_yellow())),
            Cell::from(order),
            active_badge(self.is_active),
        ]
    }
}

/// Table of the visible rows of one list, with a selection checkbox column
pub struct RecordTable<'a, T> {
    list: &'a ListView<T>,
    label: &'a str,
}

impl<'a, T: TableRow> RecordTable<'a, T> {
    pub fn new(list: &'a ListView<T>, label: &'a str) -> Self {
        Self { list, label }
    }

    fn placeholder(&self) -> Option<String> {
        let label = self.label.to_lowercase();
        if self.list.loading && self.list.items.is_empty() {
            return Some(format!("Loading {}…", label));
        }
        if self.list.visible_len() > 0 {
            return None;
        }
        let query = self.list.search.query.trim();
        if query.is_empty() {
            Some(format!("No {} yet", label))
        } else {
            Some(format!("No {} match \"{}\"", label, query))
        }
    }
}

impl<T: TableRow> Widget for RecordTable<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if let Some(text) = self.placeholder() {
            let y = area.y + area.height / 2;
            Paragraph::new(text)
                .style(styles::text_muted())
                .alignment(Alignment::Center)
                .render(Rect::new(area.x, y, area.width, 1), buf);
            return;
        }

        let mut titles = vec!["", "ID"];
        titles.extend_from_slice(T::headers());
        let header = Row::new(titles).style(styles::accent_bold());

        let rows = self.list.visible().into_iter().map(|item| {
            let checkbox = if self.list.selection.contains(item.id()) {
                Span::styled("[x]", styles::accent())
            } else {
                Span::styled("[ ]", styles::text_muted())
            };
            let mut cells = vec![
                Cell::from(checkbox),
                Cell::from(Span::styled(item.id().to_string(), styles::text_muted())),
            ];
            cells.extend(item.cells());
            Row::new(cells).style(styles::text_primary())
        });

        let mut widths = vec![Constraint::Length(3), Constraint::Length(5)];
        widths.extend(T::widths());

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(styles::cursor_row())
            .highlight_symbol("› ");

        let mut state = TableState::default().with_selected(Some(self.list.cursor));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_faq, test_lead, test_service, TestTerminal};
    use backoffice_app::list_view::RequestToken;
    use backoffice_core::{LeadStatus, ListPage, SearchMode};

    fn loaded<T: Record>(items: Vec<T>, mode: SearchMode) -> ListView<T> {
        let mut list = ListView::new(mode);
        list.begin_fetch(RequestToken(1));
        list.apply(RequestToken(1), Ok(ListPage::new(items)));
        list
    }

    #[test]
    fn test_faq_table_renders_row() {
        let list = loaded(vec![test_faq(1, "Q1")], SearchMode::Server);
        let mut term = TestTerminal::with_size(80, 6);
        term.render_widget(RecordTable::new(&list, "FAQs"), term.area());

        assert!(term.line_contains(0, "Question"));
        assert!(term.line_contains(1, "1"));
        assert!(term.line_contains(1, "Q1"));
        assert!(term.line_contains(1, "[ ]"));
    }

    #[test]
    fn test_lead_status_badge() {
        let list = loaded(
            vec![test_lead(5, "Ada", LeadStatus::Archived)],
            SearchMode::Server,
        );
        let mut term = TestTerminal::with_size(100, 4);
        term.render_widget(RecordTable::new(&list, "Leads"), term.area());

        assert!(term.line_contains(1, "Archived"));
        assert!(term.line_contains(1, "ada@example.com"));
    }

    #[test]
    fn test_selected_rows_show_checkbox() {
        let mut list = loaded(
            vec![test_service(1, "ISO 9001", true), test_service(2, "ISO 14001", false)],
            SearchMode::Client,
        );
        list.selection.toggle(2);
        let mut term = TestTerminal::with_size(80, 5);
        term.render_widget(RecordTable::new(&list, "Certifications"), term.area());

        assert!(term.line_contains(1, "[ ]"));
        assert!(term.line_contains(2, "[x]"));
        assert!(term.line_contains(2, "Inactive"));
    }

    #[test]
    fn test_cursor_row_highlighted() {
        let mut list = loaded(vec![test_faq(1, "A"), test_faq(2, "B")], SearchMode::Server);
        list.move_cursor(1);
        let mut term = TestTerminal::with_size(60, 4);
        term.render_widget(RecordTable::new(&list, "FAQs"), term.area());

        assert!(term.line_contains(2, "›"));
        assert!(!term.line_contains(1, "›"));
    }

    #[test]
    fn test_loading_placeholder() {
        let mut list: ListView<Faq> = ListView::new(SearchMode::Server);
        list.begin_fetch(RequestToken(1));
        let mut term = TestTerminal::with_size(40, 5);
        term.render_widget(RecordTable::new(&list, "FAQs"), term.area());

        assert!(term.buffer_contains("Loading faqs…"));
    }

    #[test]
    fn test_empty_placeholder_mentions_query() {
        let mut list = loaded(vec![test_service(1, "ISO 9001", true)], SearchMode::Client);
        list.search.input("zzz".to_string());
        let mut term = TestTerminal::with_size(60, 5);
        term.render_widget(RecordTable::new(&list, "Certifications"), term.area());

        assert!(term.buffer_contains("No certifications match \"zzz\""));
    }

    #[test]
    fn test_excerpt_truncates_by_width() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("line one\nline two", 20), "line one line two");
        assert_eq!(excerpt("abcdefghij", 5), "abcd…");
        assert_eq!(excerpt("日本語テキスト", 5), "日本…");
    }
}

//! Status bar widget
//!
//! Displays fetch state, the latest notification, selection and paging info.

use backoffice_app::state::{AppState, NotificationKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn fetch_indicator(&self) -> Span<'static> {
        let page = &self.state.page;
        if page.is_loading() {
            Span::styled("⟳ Loading", styles::status_yellow())
        } else if let Some(err) = page.last_error() {
            // Rows on screen are from an earlier successful fetch
            Span::styled(format!("⚠ Stale: {}", err), styles::status_red())
        } else {
            Span::styled("● Ready", styles::status_green())
        }
    }

    fn notification(&self) -> Option<Span<'static>> {
        self.state.notification.as_ref().map(|n| match n.kind {
            NotificationKind::Success => {
                Span::styled(format!("✓ {}", n.message), styles::status_green())
            }
            NotificationKind::Error => {
                Span::styled(format!("✗ {}", n.message), styles::status_red())
            }
        })
    }

    fn position(&self) -> String {
        let page = &self.state.page;
        match (page.total_pages(), page.total()) {
            (Some(pages), Some(total)) => format!(
                "Page {}/{} · {} total",
                page.page_number(),
                pages.max(1),
                total
            ),
            _ => format!("{} rows", page.visible_len()),
        }
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::text_muted());
        let mut segments = vec![Span::raw(" "), self.fetch_indicator()];

        if let Some(note) = self.notification() {
            segments.push(separator.clone());
            segments.push(note);
        }

        let selected = self.state.page.selection_len();
        if selected > 0 {
            segments.push(separator.clone());
            segments.push(Span::styled(format!("{} selected", selected), styles::accent()));
        }

        if self.state.in_flight > 0 {
            segments.push(separator.clone());
            segments.push(Span::styled(
                format!("{} saving", self.state.in_flight),
                styles::status_yellow(),
            ));
        }

        segments.push(separator);
        segments.push(Span::styled(self.position(), styles::text_secondary()));
        segments.push(Span::raw(" "));
        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.build_segments()))
            .style(Style::default().bg(palette::CARD_BG))
            .render(area, buf);
    }
}

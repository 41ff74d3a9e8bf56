//! Search bar shown above the record table

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct SearchBar<'a> {
    query: &'a str,
    /// Search box has keyboard focus
    active: bool,
    /// Typed text not yet sent to the backend
    pending: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a str, active: bool) -> Self {
        Self {
            query,
            active,
            pending: false,
        }
    }

    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let prompt_style = if self.active {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };
        let mut spans = vec![Span::styled(" / ", prompt_style)];

        if self.query.is_empty() && !self.active {
            spans.push(Span::styled("search", styles::text_muted()));
        } else {
            spans.push(Span::styled(self.query, styles::text_primary()));
            if self.active {
                spans.push(Span::styled("_", styles::keybinding()));
            }
        }

        if self.pending {
            spans.push(Span::styled("  searching…", styles::status_yellow()));
        } else if self.active {
            spans.push(Span::styled("  Enter done  Esc clear", styles::text_muted()));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

//! Header bar widget
//!
//! Shows the app title, the resource on screen and the main keybindings.

use backoffice_core::Resource;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const SHORTCUTS: [(&str, &str); 5] = [
    ("n", "New"),
    ("e", "Edit"),
    ("d", "Delete"),
    ("/", "Search"),
    ("q", "Quit"),
];

/// Main header showing app title, current resource, and keybindings
pub struct MainHeader {
    resource: Resource,
}

impl MainHeader {
    pub fn new(resource: Resource) -> Self {
        Self { resource }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("Backoffice", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.resource.nav_group(), styles::text_muted()),
            Span::raw(" "),
            Span::styled("›", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.resource.label(), styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        let mut spans = Vec::new();
        for (key, label) in SHORTCUTS {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }
        let shortcuts = Line::from(spans);
        let shortcuts_width = shortcuts.width() as u16;

        // Right-aligned, only when it clears the title
        if left_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width;
            buf.set_line(x, inner.y, &shortcuts, shortcuts_width);
        }
    }
}

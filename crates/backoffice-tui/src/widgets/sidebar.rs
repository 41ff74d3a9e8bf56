//! Resource navigation sidebar

use backoffice_core::Resource;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Resources grouped under their nav heading, numbered by their jump key
pub struct Sidebar {
    current: Resource,
}

impl Sidebar {
    pub fn new(current: Resource) -> Self {
        Self { current }
    }

    /// Group headings in first-seen order, each with its resources
    fn groups() -> Vec<(&'static str, Vec<Resource>)> {
        let mut groups: Vec<(&'static str, Vec<Resource>)> = Vec::new();
        for resource in Resource::ALL {
            let heading = resource.nav_group();
            match groups.iter_mut().find(|(h, _)| *h == heading) {
                Some((_, members)) => members.push(resource),
                None => groups.push((heading, vec![resource])),
            }
        }
        groups
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for (heading, members) in Self::groups() {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                heading.to_uppercase(),
                styles::text_muted(),
            )));
            for resource in members {
                let key = format!("{} ", resource.index() + 1);
                let line = if resource == self.current {
                    Line::from(vec![
                        Span::styled("▌", styles::accent()),
                        Span::styled(key, styles::keybinding()),
                        Span::styled(resource.label(), styles::focused_selected()),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw(" "),
                        Span::styled(key, styles::keybinding()),
                        Span::styled(resource.label(), styles::text_secondary()),
                    ])
                };
                lines.push(line);
            }
        }

        for (row, line) in lines.iter().enumerate().take(inner.height as usize) {
            buf.set_line(inner.x, inner.y + row as u16, line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_sidebar_lists_every_resource() {
        let mut term = TestTerminal::with_size(22, 20);
        term.render_widget(Sidebar::new(Resource::Leads), term.area());

        for resource in Resource::ALL {
            assert!(
                term.buffer_contains(resource.label()),
                "missing {}",
                resource.label()
            );
        }
        assert!(term.buffer_contains("INBOX"));
        assert!(term.buffer_contains("CONTENT"));
        assert!(term.buffer_contains("CATALOG"));
    }

    #[test]
    fn test_sidebar_numbers_match_jump_keys() {
        let mut term = TestTerminal::with_size(22, 20);
        term.render_widget(Sidebar::new(Resource::Leads), term.area());

        assert!(term.buffer_contains("4 FAQs"));
        assert!(term.buffer_contains("3 Certifications"));
    }

    #[test]
    fn test_sidebar_marks_current() {
        let mut term = TestTerminal::with_size(22, 20);
        term.render_widget(Sidebar::new(Resource::Faqs), term.area());

        assert!(term.buffer_contains("▌4 FAQs"));
        assert!(!term.buffer_contains("▌1 Leads"));
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let groups = Sidebar::groups();
        let headings: Vec<_> = groups.iter().map(|(h, _)| *h).collect();
        assert_eq!(headings, vec!["Inbox", "Content", "Catalog"]);
        assert_eq!(groups[1].1.len(), 4);
    }
}

//! Blocking error alert

use backoffice_app::state::Alert;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::styles;

pub struct AlertDialog<'a> {
    alert: &'a Alert,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Multi-line bulk summaries get a taller box
        let body_lines = self.alert.message.lines().count().clamp(1, 12) as u16;
        let modal_area = modal_overlay::prepare_modal(buf, area, 60, body_lines + 7);

        let title = format!(" {} ", self.alert.title);
        let block = styles::modal_block(&title)
            .title_alignment(Alignment::Center)
            .border_style(styles::status_red());
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        Paragraph::new(self.alert.message.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: false })
            .render(chunks[1].inner(Margin::new(1, 0)), buf);

        Paragraph::new(Line::from(vec![
            Span::styled(
                " OK ",
                styles::focused_selected().add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_alert_renders_title_and_message() {
        let mut term = TestTerminal::new();
        let alert = Alert {
            title: "Delete failed".to_string(),
            message: "HTTP 500: server error".to_string(),
        };
        term.render_widget(AlertDialog::new(&alert), term.area());

        assert!(term.buffer_contains("Delete failed"));
        assert!(term.buffer_contains("HTTP 500: server error"));
        assert!(term.buffer_contains(" OK "));
    }

    #[test]
    fn test_alert_shows_each_failure_line() {
        let mut term = TestTerminal::new();
        let alert = Alert {
            title: "Bulk delete incomplete".to_string(),
            message: "Deleted 2 of 3\n#2: HTTP 404: not found".to_string(),
        };
        term.render_widget(AlertDialog::new(&alert), term.area());

        assert!(term.buffer_contains("Deleted 2 of 3"));
        assert!(term.buffer_contains("#2: HTTP 404"));
    }
}

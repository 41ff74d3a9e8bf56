//! Confirmation dialog widget for delete and quit confirmations

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use backoffice_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use crate::theme::styles;

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn buttons(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (idx, (label, _)) in self.state.options.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if idx == self.state.selected {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", label), style));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::prepare_modal(buf, area, 54, 9);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::status_yellow())
            .render(chunks[1], buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        let hints = Line::from(vec![
            Span::styled("y", styles::keybinding()),
            Span::styled(" confirm  ", styles::text_muted()),
            Span::styled("n/Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]);
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}

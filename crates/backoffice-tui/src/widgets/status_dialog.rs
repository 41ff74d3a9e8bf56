//! Lead status picker

use backoffice_app::state::StatusDialogState;
use backoffice_core::LeadStatus;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

pub struct StatusDialog<'a> {
    state: &'a StatusDialogState,
}

impl<'a> StatusDialog<'a> {
    pub fn new(state: &'a StatusDialogState) -> Self {
        Self { state }
    }
}

impl Widget for StatusDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = LeadStatus::ALL.len() as u16 + 6;
        let modal_area = modal_overlay::prepare_modal(buf, area, 40, height);

        let block = styles::modal_block(" Set lead status ").title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let target = match self.state.ids.as_slice() {
            [id] => format!("Lead #{}", id),
            ids => format!("{} selected leads", ids.len()),
        };

        let mut lines = vec![
            Line::from(Span::styled(target, styles::text_secondary())),
            Line::default(),
        ];
        for status in LeadStatus::ALL {
            let line = if status == self.state.selected {
                Line::from(vec![
                    Span::styled("› ", styles::accent()),
                    Span::styled(format!(" {} ", status.label()), styles::focused_selected()),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!(" {} ", status.label()), styles::lead_status(status)),
                ])
            };
            lines.push(line);
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" apply  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_lists_all_statuses() {
        let mut term = TestTerminal::new();
        let state = StatusDialogState::new(vec![5], LeadStatus::New);
        term.render_widget(StatusDialog::new(&state), term.area());

        assert!(term.buffer_contains("Set lead status"));
        assert!(term.buffer_contains("Lead #5"));
        for status in LeadStatus::ALL {
            assert!(term.buffer_contains(status.label()));
        }
    }

    #[test]
    fn test_marks_selected_status() {
        let mut term = TestTerminal::new();
        let state = StatusDialogState::new(vec![1, 2, 3], LeadStatus::Resolved);
        term.render_widget(StatusDialog::new(&state), term.area());

        assert!(term.buffer_contains("3 selected leads"));
        assert!(term.buffer_contains("›  Resolved"));
        assert!(!term.buffer_contains("›  New"));
    }
}

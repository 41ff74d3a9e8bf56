//! Create/edit form modal
//!
//! Fields are laid out top to bottom as a label row followed by the value.
//! When the form is taller than the modal, it scrolls so the focused field
//! stays visible.

use backoffice_app::form::{FieldKind, FormField, FormState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

const MULTILINE_ROWS: usize = 3;
const MODAL_WIDTH: u16 = 76;
const MODAL_HEIGHT: u16 = 26;

pub struct FormModal<'a> {
    form: &'a FormState,
}

impl<'a> FormModal<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self { form }
    }

    fn field_lines(&self, idx: usize, field: &'a FormField) -> Vec<Line<'a>> {
        let focused = idx == self.form.focus;
        let mut label = vec![
            Span::styled(
                if focused { "› " } else { "  " },
                styles::accent(),
            ),
            Span::styled(
                field.label,
                if focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            ),
        ];
        if field.required {
            label.push(Span::styled(" *", styles::status_red()));
        }
        let mut lines = vec![Line::from(label)];

        let value_style = if focused {
            styles::text_primary()
        } else {
            styles::text_secondary()
        };
        let cursor = if focused && field.is_text_like() && self.form.submitting.is_none() {
            Some(Span::styled("_", styles::keybinding()))
        } else {
            None
        };

        match field.kind {
            FieldKind::MultiLine => {
                let text = field.text();
                let all: Vec<&str> = if text.is_empty() {
                    vec![""]
                } else {
                    text.split('\n').collect()
                };
                // Focused shows the tail where typing happens
                let shown: Vec<&str> = if focused {
                    all.iter()
                        .rev()
                        .take(MULTILINE_ROWS)
                        .rev()
                        .copied()
                        .collect()
                } else {
                    all.iter().take(MULTILINE_ROWS).copied().collect()
                };
                let last = shown.len().saturating_sub(1);
                for (i, row) in shown.into_iter().enumerate() {
                    let mut spans = vec![Span::raw("    "), Span::styled(row, value_style)];
                    if i == last {
                        if let Some(c) = cursor.clone() {
                            spans.push(c);
                        }
                    }
                    lines.push(Line::from(spans));
                }
                if all.len() > MULTILINE_ROWS {
                    lines.push(Line::from(Span::styled(
                        format!("    ({} lines)", all.len()),
                        styles::text_muted(),
                    )));
                }
            }
            FieldKind::File if field.text().is_empty() => {
                let hint = match (&self.form.existing_file, self.form.is_edit()) {
                    (Some(current), true) => format!("keep current: {}", current),
                    _ => "path to a local file".to_string(),
                };
                let mut spans = vec![Span::raw("    ")];
                if let Some(c) = cursor {
                    spans.push(c);
                }
                spans.push(Span::styled(hint, styles::text_muted()));
                lines.push(Line::from(spans));
            }
            FieldKind::Toggle | FieldKind::Stars => {
                let mut spans = vec![
                    Span::raw("    "),
                    Span::styled(field.display(), styles::status_yellow()),
                ];
                if focused {
                    spans.push(Span::styled("  ←/→ change", styles::text_muted()));
                }
                lines.push(Line::from(spans));
            }
            FieldKind::Text | FieldKind::File | FieldKind::Number => {
                let mut spans = vec![Span::raw("    "), Span::styled(field.text(), value_style)];
                if let Some(c) = cursor {
                    spans.push(c);
                }
                lines.push(Line::from(spans));
            }
        }
        lines
    }

    /// Lines of every field from the first one that keeps `focus` in view
    fn visible_lines(&self, height: usize) -> Vec<Line<'a>> {
        let blocks: Vec<Vec<Line<'a>>> = self
            .form
            .fields
            .iter()
            .enumerate()
            .map(|(idx, field)| self.field_lines(idx, field))
            .collect();

        let focus = self.form.focus.min(blocks.len().saturating_sub(1));
        let mut start = 0;
        while start < focus {
            let needed: usize = blocks[start..=focus].iter().map(Vec::len).sum();
            if needed <= height {
                break;
            }
            start += 1;
        }
        blocks.into_iter().skip(start).flatten().collect()
    }

    fn footer(&self) -> Line<'a> {
        if self.form.submitting.is_some() {
            return Line::from(Span::styled("Saving…", styles::status_yellow()));
        }
        Line::from(vec![
            Span::styled("Ctrl+S", styles::keybinding()),
            Span::styled(" save  ", styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" next field  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ])
    }
}

impl Widget for FormModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::prepare_modal(
            buf,
            area,
            MODAL_WIDTH.min(area.width.saturating_sub(4)),
            MODAL_HEIGHT.min(area.height.saturating_sub(2)),
        );

        let title = format!(" {} ", self.form.title());
        let block = styles::modal_block(&title);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Fields
            Constraint::Length(1), // Error
            Constraint::Length(1), // Footer
        ])
        .split(inner);

        let lines = self.visible_lines(chunks[0].height as usize);
        Paragraph::new(lines).render(chunks[0], buf);

        if let Some(error) = &self.form.error {
            Paragraph::new(Span::styled(format!("  {}", error), styles::status_red()))
                .render(chunks[1], buf);
        }

        Paragraph::new(self.footer())
            .alignment(Alignment::Right)
            .render(chunks[2], buf);
    }
}

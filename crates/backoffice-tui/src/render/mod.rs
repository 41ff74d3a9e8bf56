//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use backoffice_app::page::PageState;
use backoffice_app::state::{AppState, UiMode};
use backoffice_core::SearchMode;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI. Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.sidebar_collapsed);
    let resource = state.resource();

    frame.render_widget(widgets::MainHeader::new(resource), areas.header);

    if let Some(sidebar) = areas.sidebar {
        frame.render_widget(widgets::Sidebar::new(resource), sidebar);
    }

    let mut content = areas.content;
    if let Some(leads) = state.page.leads() {
        let (stats, table) = layout::split_stats(content);
        frame.render_widget(
            widgets::LeadStatsBar::new(leads.stats, leads.status_filter),
            stats,
        );
        content = table;
    }
    render_list(frame, content, state);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    render_overlays(frame, area, state);
}

fn list_title(state: &AppState) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {} ", state.resource().label()),
        styles::accent_bold(),
    )];
    if let Some(filter) = state.page.leads().and_then(|l| l.status_filter) {
        spans.push(Span::styled(
            format!("· {} ", filter.label()),
            styles::lead_status(filter),
        ));
    }
    Line::from(spans)
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = matches!(state.ui_mode, UiMode::Normal | UiMode::SearchInput);
    let block = styles::glass_block(focused)
        .title(list_title(state))
        .style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [search_area, table_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);

    let page = &state.page;
    let pending = page.resource().search_mode() == SearchMode::Server
        && page.search_query().trim() != page.applied_search();
    frame.render_widget(
        widgets::SearchBar::new(page.search_query(), state.ui_mode == UiMode::SearchInput)
            .pending(pending),
        search_area,
    );

    let label = page.resource().label();
    match page {
        PageState::Leads(leads) => {
            frame.render_widget(widgets::RecordTable::new(&leads.list, label), table_area)
        }
        PageState::Blogs(list) => {
            frame.render_widget(widgets::RecordTable::new(list, label), table_area)
        }
        PageState::Services(list) => {
            frame.render_widget(widgets::RecordTable::new(list, label), table_area)
        }
        PageState::Faqs(list) => {
            frame.render_widget(widgets::RecordTable::new(list, label), table_area)
        }
        PageState::Galleries(list) => {
            frame.render_widget(widgets::RecordTable::new(list, label), table_area)
        }
        PageState::Testimonials(list) => {
            frame.render_widget(widgets::RecordTable::new(list, label), table_area)
        }
    }
}

/// Modals, bottom to top: form, dialogs, alert
fn render_overlays(frame: &mut Frame, area: Rect, state: &AppState) {
    if let Some(form) = &state.form {
        frame.render_widget(widgets::FormModal::new(form), area);
    }
    if let Some(dialog) = &state.confirm_dialog {
        frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
    }
    if let Some(dialog) = &state.status_dialog {
        frame.render_widget(widgets::StatusDialog::new(dialog), area);
    }
    if let Some(alert) = &state.alert {
        frame.render_widget(widgets::AlertDialog::new(alert), area);
    }
}

//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `list`: fetching, search and pagination
//! - `form`: create/edit form lifecycle
//! - `mutation`: deletes, bulk operations, lead status and service toggle

use std::time::Instant;

use backoffice_core::AppPhase;

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{form, keys::handle_key, list, mutation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit | Message::ConfirmQuit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.expire_notification(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(resource) => list::handle_navigate(state, resource),
        Message::NextResource => UpdateResult::message(Message::Navigate(state.resource().next())),
        Message::PrevResource => UpdateResult::message(Message::Navigate(state.resource().prev())),
        Message::ToggleSidebar => {
            state.sidebar_collapsed = !state.sidebar_collapsed;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List View
        // ─────────────────────────────────────────────────────────
        Message::Refresh => list::refresh(state),
        Message::RefreshStats => list::handle_refresh_stats(state),
        Message::CursorUp => {
            state.page.move_cursor(-1);
            UpdateResult::none()
        }
        Message::CursorDown => {
            state.page.move_cursor(1);
            UpdateResult::none()
        }
        Message::CursorTop => {
            state.page.cursor_to_start();
            UpdateResult::none()
        }
        Message::CursorBottom => {
            state.page.cursor_to_end();
            UpdateResult::none()
        }
        Message::NextPage => list::handle_next_page(state),
        Message::PrevPage => list::handle_prev_page(state),
        Message::CycleStatusFilter => list::handle_cycle_status_filter(state),
        Message::ToggleRowSelection => {
            state.page.toggle_cursor_selection();
            UpdateResult::none()
        }
        Message::ToggleSelectAll => {
            state.page.toggle_select_all();
            UpdateResult::none()
        }
        Message::ClearSelection => {
            state.page.clear_selection();
            UpdateResult::none()
        }
        Message::ListLoaded { token, result } => list::handle_list_loaded(state, token, result),
        Message::StatsLoaded { token, result } => list::handle_stats_loaded(state, token, result),

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            UpdateResult::none()
        }
        Message::SearchInput { text } => list::handle_search_input(state, text),
        Message::SearchDebounced { generation } => {
            list::handle_search_debounced(state, generation)
        }
        Message::ExitSearch => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::ClearSearch => list::handle_clear_search(state),

        // ─────────────────────────────────────────────────────────
        // Form Modal
        // ─────────────────────────────────────────────────────────
        Message::OpenCreateForm => form::handle_open_create(state),
        Message::OpenEditForm => form::handle_open_edit(state),
        Message::EditRecordLoaded { token, result } => {
            form::handle_edit_record_loaded(state, token, result)
        }
        Message::FormNextField => {
            if let Some(form) = state.form.as_mut() {
                form.focus_next();
            }
            UpdateResult::none()
        }
        Message::FormPrevField => {
            if let Some(form) = state.form.as_mut() {
                form.focus_prev();
            }
            UpdateResult::none()
        }
        Message::FormInput { text } => {
            if let Some(form) = state.form.as_mut() {
                form.input(text);
                form.error = None;
            }
            UpdateResult::none()
        }
        Message::FormAdjust(delta) => {
            if let Some(form) = state.form.as_mut() {
                form.adjust(delta);
            }
            UpdateResult::none()
        }
        Message::SubmitForm => form::handle_submit(state),
        Message::CancelForm => {
            state.close_form();
            UpdateResult::none()
        }
        Message::FormSubmitted { token, result } => form::handle_submitted(state, token, result),

        // ─────────────────────────────────────────────────────────
        // Mutations
        // ─────────────────────────────────────────────────────────
        Message::RequestDelete => mutation::handle_request_delete(state),
        Message::DeleteConfirmed { resource, ids } => {
            mutation::handle_delete_confirmed(state, resource, ids)
        }
        Message::RecordDeleted {
            resource,
            id,
            result,
        } => mutation::handle_record_deleted(state, resource, id, result),
        Message::BulkDeleted { resource, outcome } => {
            mutation::handle_bulk_deleted(state, resource, outcome)
        }
        Message::ToggleServiceActive => mutation::handle_toggle_service(state),
        Message::ServiceToggled { id, result } => {
            mutation::handle_service_toggled(state, id, result)
        }
        Message::OpenStatusDialog => mutation::handle_open_status_dialog(state),
        Message::StatusDialogMove(delta) => {
            if let Some(dialog) = state.status_dialog.as_mut() {
                dialog.move_selection(delta);
            }
            UpdateResult::none()
        }
        Message::ApplyLeadStatus => mutation::handle_apply_lead_status(state),
        Message::LeadStatusApplied { status, outcome } => {
            mutation::handle_lead_status_applied(state, status, outcome)
        }

        // ─────────────────────────────────────────────────────────
        // Dialogs
        // ─────────────────────────────────────────────────────────
        Message::DialogNext => {
            if let Some(dialog) = state.confirm_dialog.as_mut() {
                dialog.select_next();
            }
            UpdateResult::none()
        }
        Message::DialogPrev => {
            if let Some(dialog) = state.confirm_dialog.as_mut() {
                dialog.select_prev();
            }
            UpdateResult::none()
        }
        Message::DialogSelect => {
            let chosen = state.confirm_dialog.as_ref().and_then(|d| d.chosen());
            state.close_dialogs();
            chosen.map_or_else(UpdateResult::none, UpdateResult::message)
        }
        Message::DialogAccept => {
            let chosen = state.confirm_dialog.as_ref().and_then(|d| d.affirmative());
            state.close_dialogs();
            chosen.map_or_else(UpdateResult::none, UpdateResult::message)
        }
        Message::CloseDialog => {
            state.close_dialogs();
            UpdateResult::none()
        }
        Message::DismissAlert => {
            state.dismiss_alert();
            UpdateResult::none()
        }
    }
}

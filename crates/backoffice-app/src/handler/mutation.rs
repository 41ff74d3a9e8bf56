//! Delete, bulk, lead status and service toggle handlers

use backoffice_client::BulkOutcome;
use backoffice_core::{LeadStatus, RecordId, Resource};
use tracing::{info, warn};

use crate::confirm_dialog::ConfirmDialogState;
use crate::page::PageState;
use crate::state::{AppState, StatusDialogState, UiMode};

use super::{list, UpdateAction, UpdateResult};

/// Ask for confirmation before deleting the selection (or the highlighted row)
pub(crate) fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    let resource = state.resource();
    if !resource.can_delete() {
        state.notify_error(format!("{} cannot be deleted", resource.label()));
        return UpdateResult::none();
    }
    let ids = state.page.target_ids();
    if ids.is_empty() {
        return UpdateResult::none();
    }
    state.show_confirm_dialog(ConfirmDialogState::delete_confirmation(resource, ids));
    UpdateResult::none()
}

pub(crate) fn handle_delete_confirmed(
    state: &mut AppState,
    resource: Resource,
    ids: Vec<RecordId>,
) -> UpdateResult {
    state.close_dialogs();
    if resource != state.resource() || ids.is_empty() {
        return UpdateResult::none();
    }

    if let PageState::Galleries(list) = &mut state.page {
        list.items.retain(|item| !ids.contains(&item.id));
        list.selection.clear();
        list.clamp_cursor();
        state.notify_success(format!("Removed {} gallery item(s)", ids.len()));
        return UpdateResult::none();
    }

    let from_selection = state.page.selection_len() > 0;
    state.mutation_started();
    match ids.as_slice() {
        [id] if !from_selection => UpdateResult::action(UpdateAction::DeleteRecord {
            resource,
            id: *id,
        }),
        _ => UpdateResult::action(UpdateAction::BulkDelete { resource, ids }),
    }
}

pub(crate) fn handle_record_deleted(
    state: &mut AppState,
    resource: Resource,
    id: RecordId,
    result: Result<(), String>,
) -> UpdateResult {
    state.mutation_finished();
    match result {
        Ok(()) => {
            info!("Deleted {} #{}", resource.noun(), id);
            if resource != state.resource() {
                return UpdateResult::none();
            }
            state.notify_success(format!("Deleted {} #{}", resource.noun(), id));
            list::refresh(state)
        }
        Err(e) => {
            warn!("Failed to delete {} #{}: {}", resource.noun(), id, e);
            state.show_alert("Delete failed", e);
            UpdateResult::none()
        }
    }
}

/// Every id was attempted; report successes and per-id failures
pub(crate) fn handle_bulk_deleted(
    state: &mut AppState,
    resource: Resource,
    outcome: BulkOutcome,
) -> UpdateResult {
    state.mutation_finished();
    let summary = outcome.summary("Deleted");
    info!("Bulk delete of {}: {}", resource.label(), summary);

    if resource != state.resource() {
        return UpdateResult::none();
    }
    state.page.clear_selection();
    if outcome.all_succeeded() {
        state.notify_success(summary);
    } else {
        state.show_alert("Bulk delete incomplete", summary);
    }
    list::refresh(state)
}

pub(crate) fn handle_toggle_service(state: &mut AppState) -> UpdateResult {
    if !state.resource().can_toggle_active() {
        return UpdateResult::none();
    }
    let Some(id) = state.page.cursor_id() else {
        return UpdateResult::none();
    };
    state.mutation_started();
    UpdateResult::action(UpdateAction::ToggleService { id })
}

/// Flip the row locally on success; refetch to resync on failure
pub(crate) fn handle_service_toggled(
    state: &mut AppState,
    id: RecordId,
    result: Result<(), String>,
) -> UpdateResult {
    state.mutation_finished();
    let PageState::Services(list) = &mut state.page else {
        return UpdateResult::none();
    };

    match result {
        Ok(()) => {
            let label = list.find_mut(id).map(|service| {
                service.is_active = !service.is_active;
                if service.is_active {
                    "activated"
                } else {
                    "deactivated"
                }
            });
            if let Some(label) = label {
                state.notify_success(format!("Certification #{} {}", id, label));
            }
            UpdateResult::none()
        }
        Err(e) => {
            warn!("Failed to toggle service #{}: {}", id, e);
            state.notify_error(format!("Toggle failed: {}", e));
            list::refresh(state)
        }
    }
}

pub(crate) fn handle_open_status_dialog(state: &mut AppState) -> UpdateResult {
    let Some(leads) = state.page.leads() else {
        return UpdateResult::none();
    };
    let ids = leads.list.target_ids();
    if ids.is_empty() {
        return UpdateResult::none();
    }
    let current = leads
        .list
        .cursor_item()
        .map(|lead| lead.status)
        .unwrap_or_default();

    state.confirm_dialog = None;
    state.status_dialog = Some(StatusDialogState::new(ids, current));
    state.ui_mode = UiMode::StatusDialog;
    UpdateResult::none()
}

pub(crate) fn handle_apply_lead_status(state: &mut AppState) -> UpdateResult {
    let Some(dialog) = state.status_dialog.take() else {
        return UpdateResult::none();
    };
    state.close_dialogs();
    state.mutation_started();
    UpdateResult::action(UpdateAction::SetLeadStatus {
        ids: dialog.ids,
        status: dialog.selected,
    })
}

/// Refetch both the list and the stats after a status change
pub(crate) fn handle_lead_status_applied(
    state: &mut AppState,
    status: LeadStatus,
    outcome: BulkOutcome,
) -> UpdateResult {
    state.mutation_finished();
    let summary = outcome.summary("Updated");
    info!("Lead status update: {}", summary);

    if state.resource() != Resource::Leads {
        return UpdateResult::none();
    }
    state.page.clear_selection();
    if outcome.all_succeeded() {
        let n = outcome.succeeded.len();
        state.notify_success(format!(
            "Marked {} lead{} as {}",
            n,
            if n == 1 { "" } else { "s" },
            status.label()
        ));
    } else {
        state.show_alert("Status update incomplete", summary);
    }
    list::refresh(state)
}

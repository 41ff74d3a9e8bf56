//! List view handlers: fetching, search, pagination, cursor and selection

use backoffice_client::LeadQuery;
use backoffice_core::{Resource, SearchMode};
use tracing::{debug, warn};

use crate::list_view::RequestToken;
use crate::message::Message;
use crate::page::{PageState, RecordPage};
use crate::state::{AppState, UiMode};

use super::{ListRequest, UpdateAction, UpdateResult};

/// Query for the current page. `None` for local-only resources.
pub(crate) fn list_request(page: &PageState) -> Option<ListRequest> {
    let applied = page.applied_search();
    let search = (!applied.is_empty()).then(|| applied.to_string());

    match page {
        PageState::Leads(leads) => Some(ListRequest::Leads(LeadQuery {
            page: leads.list.page,
            limit: leads.limit,
            status: leads.status_filter,
            search,
        })),
        PageState::Blogs(_) => Some(ListRequest::Blogs),
        PageState::Services(_) => Some(ListRequest::Services),
        PageState::Faqs(_) => Some(ListRequest::Faqs { search }),
        PageState::Galleries(_) => None,
        PageState::Testimonials(_) => Some(ListRequest::Testimonials),
    }
}

/// Fetch the list only
pub(crate) fn fetch_list(state: &mut AppState) -> UpdateResult {
    let Some(request) = list_request(&state.page) else {
        return UpdateResult::none();
    };
    let token = state.next_token();
    state.page.begin_fetch(token);
    debug!("Fetching {} ({})", state.resource(), token);
    UpdateResult::action(UpdateAction::FetchList { token, request })
}

/// Fetch the list, and the stats when on the leads page
pub(crate) fn refresh(state: &mut AppState) -> UpdateResult {
    let mut result = fetch_list(state);
    if state.resource() == Resource::Leads {
        result.message = Some(Message::RefreshStats);
    }
    result
}

pub(crate) fn handle_refresh_stats(state: &mut AppState) -> UpdateResult {
    if state.resource() != Resource::Leads {
        return UpdateResult::none();
    }
    let token = state.next_token();
    if let Some(leads) = state.page.leads_mut() {
        leads.stats_pending = Some(token);
    }
    UpdateResult::action(UpdateAction::FetchLeadStats { token })
}

/// Show a resource page with a fresh view-model
pub(crate) fn handle_navigate(state: &mut AppState, resource: Resource) -> UpdateResult {
    debug!("Navigating to {}", resource);
    state.page = PageState::new(resource, state.settings.behavior.page_size);
    state.form = None;
    state.pending_edit = None;
    state.close_dialogs();
    refresh(state)
}

pub(crate) fn handle_list_loaded(
    state: &mut AppState,
    token: RequestToken,
    result: Result<RecordPage, String>,
) -> UpdateResult {
    let failed = result.as_ref().err().cloned();
    if !state.page.apply(token, result) {
        debug!("Ignoring stale list response {}", token);
        return UpdateResult::none();
    }
    if let Some(e) = failed {
        warn!("Failed to fetch {}: {}", state.resource(), e);
    }
    UpdateResult::none()
}

pub(crate) fn handle_stats_loaded(
    state: &mut AppState,
    token: RequestToken,
    result: Result<backoffice_core::LeadStats, String>,
) -> UpdateResult {
    let applied = state
        .page
        .leads_mut()
        .is_some_and(|leads| leads.apply_stats(token, result));
    if !applied {
        debug!("Ignoring stale stats response {}", token);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Pagination and filter
// ─────────────────────────────────────────────────────────────────

pub(crate) fn handle_next_page(state: &mut AppState) -> UpdateResult {
    if state.page.next_page() {
        fetch_list(state)
    } else {
        UpdateResult::none()
    }
}

pub(crate) fn handle_prev_page(state: &mut AppState) -> UpdateResult {
    if state.page.prev_page() {
        fetch_list(state)
    } else {
        UpdateResult::none()
    }
}

pub(crate) fn handle_cycle_status_filter(state: &mut AppState) -> UpdateResult {
    let Some(leads) = state.page.leads_mut() else {
        return UpdateResult::none();
    };
    leads.cycle_status_filter();
    leads.list.page = 1;
    fetch_list(state)
}

// ─────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────

pub(crate) fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    let generation = state.page.search_input(text);
    match state.resource().search_mode() {
        SearchMode::Server => UpdateResult::action(UpdateAction::ScheduleSearch {
            generation,
            delay: state.search_debounce(),
        }),
        SearchMode::Client => {
            state.page.cursor_to_start();
            UpdateResult::none()
        }
    }
}

/// Debounce timer fired; fetch only if no keystroke came after it
pub(crate) fn handle_search_debounced(state: &mut AppState, generation: u64) -> UpdateResult {
    if !state.page.is_search_current(generation) {
        return UpdateResult::none();
    }
    if state.resource().search_mode() != SearchMode::Server {
        return UpdateResult::none();
    }
    if state.page.search_query().trim() == state.page.applied_search() {
        return UpdateResult::none();
    }
    state.page.commit_search();
    fetch_list(state)
}

pub(crate) fn handle_clear_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    // Bumping the generation also cancels any pending debounce timer
    state.page.search_input(String::new());
    state.page.cursor_to_start();

    if state.resource().search_mode() == SearchMode::Server && !state.page.applied_search().is_empty()
    {
        state.page.commit_search();
        return fetch_list(state);
    }
    UpdateResult::none()
}

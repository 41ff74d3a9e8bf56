//! Create/edit form handlers

use backoffice_core::{gallery, Blog, Resource};
use tracing::{debug, info};

use crate::form::{FormMode, FormState};
use crate::list_view::RequestToken;
use crate::page::PageState;
use crate::state::AppState;

use super::{list, UpdateAction, UpdateResult};

pub(crate) fn handle_open_create(state: &mut AppState) -> UpdateResult {
    let resource = state.resource();
    match FormState::create(resource) {
        Some(form) => state.open_form(form),
        None => state.notify_error(format!("{} cannot be created here", resource.label())),
    }
    UpdateResult::none()
}

/// Open the edit form for the highlighted row. Blogs are refetched by id
/// first; other resources edit the row as listed.
pub(crate) fn handle_open_edit(state: &mut AppState) -> UpdateResult {
    let resource = state.resource();
    if !resource.can_edit() {
        state.notify_error(format!("{} cannot be edited here", resource.label()));
        return UpdateResult::none();
    }

    let form = match &state.page {
        PageState::Blogs(list) => {
            let Some(id) = list.cursor_id() else {
                return UpdateResult::none();
            };
            let token = state.next_token();
            state.pending_edit = Some(token);
            debug!("Loading blog #{} for editing", id);
            return UpdateResult::action(UpdateAction::FetchBlogForEdit { token, id });
        }
        PageState::Faqs(list) => list.cursor_item().map(FormState::edit),
        PageState::Testimonials(list) => list.cursor_item().map(FormState::edit),
        PageState::Galleries(list) => list.cursor_item().map(FormState::edit),
        PageState::Leads(_) | PageState::Services(_) => None,
    };

    if let Some(form) = form {
        state.open_form(form);
    }
    UpdateResult::none()
}

pub(crate) fn handle_edit_record_loaded(
    state: &mut AppState,
    token: RequestToken,
    result: Result<Blog, String>,
) -> UpdateResult {
    if state.pending_edit != Some(token) || state.resource() != Resource::Blogs {
        debug!("Ignoring stale edit record {}", token);
        return UpdateResult::none();
    }
    state.pending_edit = None;

    match result {
        Ok(blog) => state.open_form(FormState::edit(&blog)),
        Err(e) => state.show_alert("Could not load blog", e),
    }
    UpdateResult::none()
}

/// Validate the draft and send it. Validation errors stay in the form and no
/// request is made.
pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.form.as_mut() else {
        return UpdateResult::none();
    };
    if form.submitting.is_some() {
        return UpdateResult::none();
    }
    if let Err(e) = form.validate() {
        form.error = Some(e);
        return UpdateResult::none();
    }
    form.error = None;

    if form.resource == Resource::Galleries {
        return save_gallery_item(state);
    }

    let resource = form.resource;
    let mode = form.mode;
    let payload = form.to_payload();
    let token = state.next_token();
    if let Some(form) = state.form.as_mut() {
        form.submitting = Some(token);
    }
    UpdateResult::action(UpdateAction::SubmitForm {
        token,
        resource,
        mode,
        payload,
    })
}

/// Galleries have no backend; the draft is applied to the local rows
fn save_gallery_item(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.form.take() else {
        return UpdateResult::none();
    };
    let PageState::Galleries(list) = &mut state.page else {
        state.close_form();
        return UpdateResult::none();
    };

    let message = match form.mode {
        FormMode::Create => {
            let item = form.to_gallery_item(gallery::next_id(&list.items));
            list.items.push(item);
            list.cursor_to_end();
            "Gallery item added".to_string()
        }
        FormMode::Edit(id) => {
            if let Some(existing) = list.find_mut(id) {
                let updated = form.to_gallery_item(id);
                existing.title = updated.title;
                existing.image = updated.image;
            }
            format!("Gallery item #{} updated", id)
        }
    };
    list.clamp_cursor();
    state.close_form();
    state.notify_success(message);
    UpdateResult::none()
}

pub(crate) fn handle_submitted(
    state: &mut AppState,
    token: RequestToken,
    result: Result<(), String>,
) -> UpdateResult {
    let awaited = state
        .form
        .as_ref()
        .is_some_and(|form| form.submitting == Some(token));

    if !awaited {
        // Form was cancelled while the request was in flight
        return match result {
            Ok(()) => list::refresh(state),
            Err(_) => UpdateResult::none(),
        };
    }

    match result {
        Ok(()) => {
            let (resource, mode) = match state.form.as_ref() {
                Some(form) => (form.resource, form.mode),
                None => return UpdateResult::none(),
            };
            let verb = match mode {
                FormMode::Create => "created",
                FormMode::Edit(_) => "updated",
            };
            info!("{} {}", resource.noun(), verb);
            state.close_form();
            state.notify_success(format!("{} {}", capitalize(resource.noun()), verb));
            list::refresh(state)
        }
        Err(e) => {
            if let Some(form) = state.form.as_mut() {
                form.submitting = None;
                form.error = Some(e);
            }
            UpdateResult::none()
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

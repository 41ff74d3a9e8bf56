//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `list`: Fetching, search, pagination, cursor and selection
//! - `form`: Create/edit form lifecycle
//! - `mutation`: Delete, bulk, status and toggle handlers

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod list;
pub(crate) mod mutation;
pub(crate) mod update;


use std::time::Duration;

use backoffice_client::{FormPayload, LeadQuery};
use backoffice_core::{LeadStatus, RecordId, Resource};

use crate::form::FormMode;
use crate::list_view::RequestToken;
use crate::message::Message;
use crate::page::PageState;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// What to fetch for a list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    Leads(LeadQuery),
    Blogs,
    Services,
    Faqs { search: Option<String> },
    Testimonials,
}

impl ListRequest {
    pub fn resource(&self) -> Resource {
        match self {
            ListRequest::Leads(_) => Resource::Leads,
            ListRequest::Blogs => Resource::Blogs,
            ListRequest::Services => Resource::Services,
            ListRequest::Faqs { .. } => Resource::Faqs,
            ListRequest::Testimonials => Resource::Testimonials,
        }
    }

    /// Unfiltered first page of `resource`. `None` for local-only resources.
    pub fn first_page(resource: Resource, page_size: u32) -> Option<Self> {
        list::list_request(&PageState::new(resource, page_size))
    }
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch a list page; the response is tagged with `token`
    FetchList {
        token: RequestToken,
        request: ListRequest,
    },

    /// Fetch lead counts by status
    FetchLeadStats { token: RequestToken },

    /// Fetch the full blog record before opening the edit form
    FetchBlogForEdit { token: RequestToken, id: RecordId },

    /// Start a debounce timer for the given search generation
    ScheduleSearch { generation: u64, delay: Duration },

    /// Create or update a record
    SubmitForm {
        token: RequestToken,
        resource: Resource,
        mode: FormMode,
        payload: FormPayload,
    },

    /// Delete one record
    DeleteRecord { resource: Resource, id: RecordId },

    /// Delete several records and report each outcome
    BulkDelete {
        resource: Resource,
        ids: Vec<RecordId>,
    },

    /// Set the status of one or more leads
    SetLeadStatus {
        ids: Vec<RecordId>,
        status: LeadStatus,
    },

    /// Flip a service's active flag
    ToggleService { id: RecordId },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Perform `action`, then process `msg`
    pub fn action_then(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}

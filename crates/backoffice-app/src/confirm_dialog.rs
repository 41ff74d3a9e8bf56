//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! `backoffice-tui`.

use backoffice_core::{RecordId, Resource};

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Button label and the message sent when it is chosen
    pub options: Vec<(String, Message)>,
    pub selected: usize,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
            selected: 0,
        }
    }

    /// Quit confirmation
    pub fn quit_confirmation() -> Self {
        Self::new(
            "Quit Backoffice?",
            "Unsaved form drafts will be lost.",
            vec![("Quit", Message::ConfirmQuit), ("Cancel", Message::CloseDialog)],
        )
    }

    /// Delete confirmation for one or more records
    pub fn delete_confirmation(resource: Resource, ids: Vec<RecordId>) -> Self {
        let message = match ids.as_slice() {
            [id] => format!("Delete {} #{}? This cannot be undone.", resource.noun(), id),
            many => format!(
                "Delete {} selected {} records? This cannot be undone.",
                many.len(),
                resource.noun()
            ),
        };
        Self::new(
            "Confirm delete",
            message,
            vec![
                ("Delete", Message::DeleteConfirmed { resource, ids }),
                ("Cancel", Message::CloseDialog),
            ],
        )
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    /// Message of the highlighted option
    pub fn chosen(&self) -> Option<Message> {
        self.options.get(self.selected).map(|(_, msg)| msg.clone())
    }

    /// Message of the first (affirmative) option
    pub fn affirmative(&self) -> Option<Message> {
        self.options.first().map(|(_, msg)| msg.clone())
    }
}

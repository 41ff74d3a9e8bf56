//! backoffice-app - Application state and orchestration for Backoffice
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the admin
//! console: a [`Message`] enum, an [`AppState`] mutated only by
//! [`handler::update`], and [`UpdateAction`]s dispatched to background tasks
//! that talk to the backend through [`backoffice_client::AdminApi`].

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod list_view;
pub mod message;
pub mod page;
pub mod process;
pub mod selection;
pub mod signals;
pub mod state;

#[cfg(test)]
pub(crate) mod fake_api;

// Re-export primary types
pub use handler::{ListRequest, UpdateAction, UpdateResult};
pub use message::Message;
pub use page::PageState;
pub use state::{AppState, UiMode};

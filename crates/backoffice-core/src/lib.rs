//! # backoffice-core - Core Domain Types
//!
//! Foundation crate for Backoffice. Provides the record types managed by the
//! admin console, the resource catalogue, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Resources (`types`)
//! - [`Resource`] - One CRUD-managed entity type (Leads, Blogs, Services, ...)
//! - [`ListPage`] - A normalised page of records with optional pagination totals
//! - [`Record`] - Common behaviour of every record (id, title, client-side search)
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Records
//! - [`ContactLead`], [`LeadStatus`], [`LeadStats`], [`StatusCount`]
//! - [`Blog`], [`Service`], [`Faq`], [`GalleryItem`], [`Testimonial`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Errors that can end the binary (terminal, config, IO, input)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Logs what was being attempted when an error passes through
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use backoffice_core::prelude::*;
//! ```

pub mod blog;
pub mod error;
pub mod faq;
pub mod gallery;
pub mod lead;
pub mod logging;
pub mod service;
pub mod testimonial;
pub mod types;

/// Prelude for common imports used throughout all Backoffice crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use blog::Blog;
pub use error::{Error, Result, ResultExt};
pub use faq::Faq;
pub use gallery::GalleryItem;
pub use lead::{ContactLead, LeadStats, LeadStatus, StatusCount};
pub use service::Service;
pub use testimonial::Testimonial;
pub use types::{AppPhase, ListPage, Record, RecordId, Resource, SearchMode};

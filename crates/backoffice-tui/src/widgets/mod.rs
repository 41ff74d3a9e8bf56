//! Custom widget components

mod alert;
mod confirm_dialog;
mod form_modal;
mod header;
mod lead_stats;
pub mod modal_overlay;
pub mod record_table;
mod search_input;
mod sidebar;
mod status_bar;
mod status_dialog;

pub use alert::AlertDialog;
pub use confirm_dialog::ConfirmDialog;
pub use form_modal::FormModal;
pub use header::MainHeader;
pub use lead_stats::LeadStatsBar;
pub use record_table::{RecordTable, TableRow};
pub use search_input::SearchBar;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use status_dialog::StatusDialog;

// Re-export state types from app layer (these are used by render/)
pub use backoffice_app::confirm_dialog::ConfirmDialogState;
pub use backoffice_app::state::{Alert, StatusDialogState};

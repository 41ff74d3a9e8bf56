//! Message types for the application (TEA pattern)

use backoffice_client::BulkOutcome;
use backoffice_core::{Blog, LeadStats, LeadStatus, RecordId, Resource};

use crate::input_key::InputKey;
use crate::list_view::RequestToken;
use crate::page::RecordPage;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick (notification expiry, spinner)
    Tick,

    /// Request to quit (may show confirmation dialog)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Show a resource page (constructs a fresh view-model)
    Navigate(Resource),
    NextResource,
    PrevResource,
    ToggleSidebar,

    // ─────────────────────────────────────────────────────────
    // List View
    // ─────────────────────────────────────────────────────────
    /// Refetch the current page
    Refresh,
    /// Refetch lead stats
    RefreshStats,
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    NextPage,
    PrevPage,
    /// Cycle the lead status filter
    CycleStatusFilter,
    ToggleRowSelection,
    ToggleSelectAll,
    ClearSelection,

    /// Rows fetched for the request carrying `token`
    ListLoaded {
        token: RequestToken,
        result: Result<RecordPage, String>,
    },

    /// Lead stats fetched
    StatsLoaded {
        token: RequestToken,
        result: Result<LeadStats, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    /// Enter search input mode
    StartSearch,
    /// Search box text changed
    SearchInput { text: String },
    /// Debounce timer fired for the given keystroke generation
    SearchDebounced { generation: u64 },
    /// Leave search mode keeping the query
    ExitSearch,
    /// Leave search mode and clear the query
    ClearSearch,

    // ─────────────────────────────────────────────────────────
    // Form Modal
    // ─────────────────────────────────────────────────────────
    OpenCreateForm,
    /// Edit the highlighted row
    OpenEditForm,
    /// Full record fetched for an edit form
    EditRecordLoaded {
        token: RequestToken,
        result: Result<Blog, String>,
    },
    FormNextField,
    FormPrevField,
    /// Focused text field changed
    FormInput { text: String },
    /// Flip a toggle or step a rating
    FormAdjust(i32),
    SubmitForm,
    CancelForm,
    /// Create/update finished
    FormSubmitted {
        token: RequestToken,
        result: Result<(), String>,
    },

    // ─────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────
    /// Ask to delete the selection or the highlighted row
    RequestDelete,
    /// Delete confirmed in the dialog
    DeleteConfirmed {
        resource: Resource,
        ids: Vec<RecordId>,
    },
    RecordDeleted {
        resource: Resource,
        id: RecordId,
        result: Result<(), String>,
    },
    BulkDeleted {
        resource: Resource,
        outcome: BulkOutcome,
    },
    ToggleServiceActive,
    ServiceToggled {
        id: RecordId,
        result: Result<(), String>,
    },
    /// Open the lead status picker for the selection or highlighted row
    OpenStatusDialog,
    StatusDialogMove(isize),
    ApplyLeadStatus,
    LeadStatusApplied {
        status: LeadStatus,
        outcome: BulkOutcome,
    },

    // ─────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────
    DialogNext,
    DialogPrev,
    /// Choose the highlighted dialog option
    DialogSelect,
    /// Choose the affirmative dialog option
    DialogAccept,
    CloseDialog,
    DismissAlert,
}

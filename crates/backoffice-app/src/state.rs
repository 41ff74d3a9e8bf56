//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use backoffice_core::{AppPhase, LeadStatus, RecordId, Resource};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::form::FormState;
use crate::list_view::RequestToken;
use crate::page::PageState;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Browsing the list
    #[default]
    Normal,

    /// Typing in the search box
    SearchInput,

    /// Create/edit modal is open
    Form,

    /// Confirmation dialog is shown
    ConfirmDialog,

    /// Lead status picker is shown
    StatusDialog,

    /// Blocking error alert is shown
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: Instant,
}

/// Blocking error dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Lead status picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDialogState {
    pub ids: Vec<RecordId>,
    pub selected: LeadStatus,
}

impl StatusDialogState {
    pub fn new(ids: Vec<RecordId>, current: LeadStatus) -> Self {
        Self {
            ids,
            selected: current,
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let all = LeadStatus::ALL;
        let idx = all.iter().position(|s| *s == self.selected).unwrap_or(0) as isize;
        let len = all.len() as isize;
        self.selected = all[((idx + delta).rem_euclid(len)) as usize];
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode
    pub ui_mode: UiMode,

    /// Application phase
    pub phase: AppPhase,

    /// Loaded settings
    pub settings: Settings,

    /// View-model of the page on screen
    pub page: PageState,

    pub sidebar_collapsed: bool,

    /// Open create/edit form
    pub form: Option<FormState>,

    pub confirm_dialog: Option<ConfirmDialogState>,

    pub status_dialog: Option<StatusDialogState>,

    pub alert: Option<Alert>,

    pub notification: Option<Notification>,

    /// Awaited full-record fetch for an edit form
    pub pending_edit: Option<RequestToken>,

    /// Mutations in flight (status bar spinner)
    pub in_flight: usize,

    request_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let page = PageState::new(Resource::Leads, settings.behavior.page_size);
        Self {
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            sidebar_collapsed: settings.ui.sidebar_collapsed,
            settings,
            page,
            form: None,
            confirm_dialog: None,
            status_dialog: None,
            alert: None,
            notification: None,
            pending_edit: None,
            in_flight: 0,
            request_seq: 0,
        }
    }

    /// Next token from the monotonically increasing request counter
    pub fn next_token(&mut self) -> RequestToken {
        self.request_seq += 1;
        RequestToken(self.request_seq)
    }

    pub fn resource(&self) -> Resource {
        self.page.resource()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Request quit - shows confirmation dialog if enabled
    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit {
            self.show_confirm_dialog(ConfirmDialogState::quit_confirmation());
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn show_confirm_dialog(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog = Some(dialog);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    /// Close whatever dialog is open and return to the mode underneath
    pub fn close_dialogs(&mut self) {
        self.confirm_dialog = None;
        self.status_dialog = None;
        self.ui_mode = if self.form.is_some() {
            UiMode::Form
        } else {
            UiMode::Normal
        };
    }

    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.confirm_dialog = None;
        self.status_dialog = None;
        self.alert = Some(Alert {
            title: title.into(),
            message: message.into(),
        });
        self.ui_mode = UiMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.close_dialogs();
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message.into());
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message.into());
    }

    fn notify(&mut self, kind: NotificationKind, message: String) {
        let ttl = self.settings.behavior.notification_ttl();
        self.notification = Some(Notification {
            kind,
            message,
            expires_at: Instant::now() + ttl,
        });
    }

    /// Drop the notification once it has expired
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.expires_at <= now)
        {
            self.notification = None;
        }
    }

    pub fn open_form(&mut self, form: FormState) {
        self.form = Some(form);
        self.ui_mode = UiMode::Form;
    }

    pub fn close_form(&mut self) {
        self.form = None;
        if self.ui_mode == UiMode::Form {
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn search_debounce(&self) -> Duration {
        self.settings.behavior.search_debounce()
    }

    pub fn mutation_started(&mut self) {
        self.in_flight += 1;
    }

    pub fn mutation_finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

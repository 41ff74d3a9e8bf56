//! Key event handlers for different UI modes

use backoffice_core::Resource;

use crate::form::FieldKind;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Form => handle_key_form(state, key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::StatusDialog => handle_key_status_dialog(key),
        UiMode::Alert => handle_key_alert(key),
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let resource = state.resource();
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Esc => Some(Message::ClearSelection),

        // Navigation
        InputKey::Tab => Some(Message::NextResource),
        InputKey::BackTab => Some(Message::PrevResource),
        InputKey::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            Resource::ALL.get(idx).copied().map(Message::Navigate)
        }
        InputKey::Char('b') => Some(Message::ToggleSidebar),

        // Cursor and paging
        InputKey::Char('k') | InputKey::Up => Some(Message::CursorUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::CursorDown),
        InputKey::Char('g') | InputKey::Home => Some(Message::CursorTop),
        InputKey::Char('G') | InputKey::End => Some(Message::CursorBottom),
        InputKey::Char(']') | InputKey::PageDown => Some(Message::NextPage),
        InputKey::Char('[') | InputKey::PageUp => Some(Message::PrevPage),

        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('r') => Some(Message::Refresh),

        // Selection
        InputKey::Char(' ') => Some(Message::ToggleRowSelection),
        InputKey::Char('a') => Some(Message::ToggleSelectAll),

        // Records
        InputKey::Char('n') if resource.can_create() => Some(Message::OpenCreateForm),
        InputKey::Char('e') if resource.can_edit() => Some(Message::OpenEditForm),
        InputKey::Char('d') | InputKey::Delete if resource.can_delete() => {
            Some(Message::RequestDelete)
        }
        InputKey::Enter => match resource {
            Resource::Leads => Some(Message::OpenStatusDialog),
            Resource::Services => Some(Message::ToggleServiceActive),
            _ if resource.can_edit() => Some(Message::OpenEditForm),
            _ => None,
        },

        // Resource specific
        InputKey::Char('s') if resource == Resource::Leads => Some(Message::OpenStatusDialog),
        InputKey::Char('f') if resource == Resource::Leads => Some(Message::CycleStatusFilter),
        InputKey::Char('t') if resource.can_toggle_active() => {
            Some(Message::ToggleServiceActive)
        }

        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Clear the query and leave search mode
        InputKey::Esc => Some(Message::ClearSearch),

        // Keep query, exit input mode
        InputKey::Enter | InputKey::Down | InputKey::Tab => Some(Message::ExitSearch),

        InputKey::Backspace => {
            let mut query = state.page.search_query().to_string();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(c) => {
            let mut query = state.page.search_query().to_string();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let form = state.form.as_ref()?;

    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Esc => return Some(Message::CancelForm),
        _ if form.submitting.is_some() => return None,
        InputKey::CharCtrl('s') => return Some(Message::SubmitForm),
        InputKey::Tab | InputKey::Down => return Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => return Some(Message::FormPrevField),
        _ => {}
    }

    let field = form.focused()?;
    match field.kind {
        FieldKind::Toggle => match key {
            InputKey::Char(' ') | InputKey::Left | InputKey::Right => {
                Some(Message::FormAdjust(0))
            }
            InputKey::Enter => Some(Message::SubmitForm),
            _ => None,
        },
        FieldKind::Stars => match key {
            InputKey::Left | InputKey::Char('-') => Some(Message::FormAdjust(-1)),
            InputKey::Right | InputKey::Char('+') => Some(Message::FormAdjust(1)),
            InputKey::Enter => Some(Message::SubmitForm),
            _ => None,
        },
        FieldKind::Text | FieldKind::MultiLine | FieldKind::File | FieldKind::Number => {
            let mut text = field.text().to_string();
            match key {
                InputKey::Enter if field.kind == FieldKind::MultiLine => {
                    text.push('\n');
                    Some(Message::FormInput { text })
                }
                InputKey::Enter => Some(Message::SubmitForm),
                InputKey::Backspace => {
                    text.pop();
                    Some(Message::FormInput { text })
                }
                InputKey::CharCtrl('u') => Some(Message::FormInput {
                    text: String::new(),
                }),
                InputKey::Char(c) if field.kind == FieldKind::Number => {
                    if c.is_ascii_digit() || (c == '-' && text.is_empty()) {
                        text.push(c);
                        Some(Message::FormInput { text })
                    } else {
                        None
                    }
                }
                InputKey::Char(c) => {
                    text.push(c);
                    Some(Message::FormInput { text })
                }
                _ => None,
            }
        }
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::BackTab | InputKey::Char('h') => Some(Message::DialogPrev),
        InputKey::Right | InputKey::Tab | InputKey::Char('l') => Some(Message::DialogNext),
        InputKey::Enter => Some(Message::DialogSelect),
        InputKey::Char('y' | 'Y') => Some(Message::DialogAccept),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CloseDialog),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_status_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::StatusDialogMove(-1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::StatusDialogMove(1)),
        InputKey::Enter => Some(Message::ApplyLeadStatus),
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseDialog),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissAlert),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

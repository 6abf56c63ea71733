//! Key event handlers for each screen

use crate::form::{CampaignForm, FormField};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen};

/// Convert key events to messages based on what is showing
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.alert.is_some() {
        return handle_key_alert(key);
    }

    match &state.screen {
        Screen::Editing(form) if form.preview.is_some() => handle_key_preview(key),
        Screen::Editing(form) => handle_key_form(form, key),
        Screen::Reviewing(_) => handle_key_review(key),
    }
}

/// Any alert is modal: only dismissal keys do something
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissAlert),
        _ => None,
    }
}

fn handle_key_preview(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::ClosePreview),
        _ => scroll_key(key),
    }
}

fn handle_key_form(form: &CampaignForm, key: InputKey) -> Option<Message> {
    let focus = form.focus;

    match key {
        InputKey::Esc => Some(Message::Quit),

        // Global shortcuts
        InputKey::CharCtrl('s') => Some(Message::Submit),
        InputKey::CharCtrl('p') => Some(Message::Preview),
        InputKey::CharCtrl('u') => Some(Message::ClearField),

        // Focus ring
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),

        // Arrow keys move the inner cursor of Roles and Estado
        InputKey::Up => Some(match focus {
            FormField::Roles => Message::RoleCursorUp,
            FormField::Estado => Message::CycleEstado { forward: false },
            _ => Message::FocusPrevious,
        }),
        InputKey::Down => Some(match focus {
            FormField::Roles => Message::RoleCursorDown,
            FormField::Estado => Message::CycleEstado { forward: true },
            _ => Message::FocusNext,
        }),
        InputKey::Left if focus == FormField::Estado => {
            Some(Message::CycleEstado { forward: false })
        }
        InputKey::Right if focus == FormField::Estado => {
            Some(Message::CycleEstado { forward: true })
        }

        InputKey::Enter => Some(Message::ActivateFocused),
        InputKey::Backspace => Some(Message::DeleteChar),

        key => {
            let c = key.printable()?;
            if focus.is_text() {
                Some(Message::InputChar(c))
            } else if c == ' ' {
                Some(Message::ActivateFocused)
            } else {
                None
            }
        }
    }
}

fn handle_key_review(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Char('c') => Some(Message::CopyPayload),
        InputKey::Char('u') => Some(Message::CopyUrl),
        InputKey::Char('n') => Some(Message::NewIntegration),
        _ => scroll_key(key),
    }
}

fn scroll_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        _ => None,
    }
}

//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{form, keys::handle_key, review, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if let Some(review) = state.review_mut() {
                review.tick();
            }
            UpdateResult::none()
        }

        Message::DismissAlert => {
            state.alert = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Editing
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => form::with_form(state, |f| f.focus_next()),
        Message::FocusPrevious => form::with_form(state, |f| f.focus_previous()),
        Message::InputChar(c) => form::with_form(state, |f| f.input_char(c)),
        Message::DeleteChar => form::with_form(state, |f| f.delete_char()),
        Message::ClearField => form::with_form(state, |f| f.clear_field()),
        Message::Edit(edit) => form::with_form(state, |f| f.apply_edit(&edit)),
        Message::TogglePublished => form::with_form(state, |f| f.toggle_published()),
        Message::RoleCursorUp => form::with_form(state, |f| f.role_cursor_up()),
        Message::RoleCursorDown => form::with_form(state, |f| f.role_cursor_down()),
        Message::ToggleRoleAtCursor => form::with_form(state, |f| f.toggle_role_at_cursor()),
        Message::CycleEstado { forward } => form::with_form(state, |f| f.cycle_estado(forward)),
        Message::ActivateFocused => form::handle_activate_focused(state),

        // ─────────────────────────────────────────────────────────
        // Preview & Submit
        // ─────────────────────────────────────────────────────────
        Message::Preview => form::handle_preview(state),
        Message::ClosePreview => form::with_form(state, |f| f.close_preview()),
        Message::Submit => form::handle_submit(state),
        Message::SubmitCompleted {
            campaign,
            url,
            outcome,
        } => form::handle_submit_completed(state, campaign, url, outcome),

        // ─────────────────────────────────────────────────────────
        // Review Screen
        // ─────────────────────────────────────────────────────────
        Message::NewIntegration => review::handle_new_integration(state),
        Message::CopyPayload => review::handle_copy(state, crate::CopyTarget::Payload),
        Message::CopyUrl => review::handle_copy(state, crate::CopyTarget::WebhookUrl),
        Message::Copied { target } => review::handle_copied(state, target),
        Message::CopyFailed { error } => review::handle_copy_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::with_scroll(state, |s| s.scroll_up(1)),
        Message::ScrollDown => scroll::with_scroll(state, |s| s.scroll_down(1)),
        Message::PageUp => scroll::with_scroll(state, |s| s.page_up()),
        Message::PageDown => scroll::with_scroll(state, |s| s.page_down()),
        Message::ScrollToTop => scroll::with_scroll(state, |s| s.scroll_to_top()),
        Message::ScrollToBottom => scroll::with_scroll(state, |s| s.scroll_to_bottom()),
    }
}

//! Scroll message handlers
//!
//! Scrolling applies to the review screen, or to the preview modal when it
//! is open over the form.

use crate::scroll::ScrollState;
use crate::state::{AppState, Screen};

use super::UpdateResult;

/// Run `f` on whichever scrollable view is showing
pub fn with_scroll(state: &mut AppState, f: impl FnOnce(&mut ScrollState)) -> UpdateResult {
    match &mut state.screen {
        Screen::Reviewing(review) => f(&mut review.scroll),
        Screen::Editing(form) => {
            if let Some(preview) = &mut form.preview {
                f(&mut preview.scroll);
            }
        }
    }
    UpdateResult::none()
}

//! Review screen handlers

use campaigner_core::prelude::*;

use crate::clipboard::CopyTarget;
use crate::form::CampaignForm;
use crate::state::{Alert, AppState, Screen};

use super::{UpdateAction, UpdateResult};

/// Drop the payload and start over with an empty form
pub fn handle_new_integration(state: &mut AppState) -> UpdateResult {
    if state.review().is_some() {
        info!("Starting a new integration");
        state.screen = Screen::Editing(CampaignForm::default());
        state.alert = None;
    }
    UpdateResult::none()
}

pub fn handle_copy(state: &mut AppState, target: CopyTarget) -> UpdateResult {
    let Some(review) = state.review() else {
        return UpdateResult::none();
    };

    match review.copy_text(target) {
        Ok(text) => UpdateResult::action(UpdateAction::CopyToClipboard { text, target }),
        Err(e) => {
            error!("Failed to serialize payload: {}", e);
            state.alert = Some(Alert::error(format!("Could not copy: {e}")));
            UpdateResult::none()
        }
    }
}

pub fn handle_copied(state: &mut AppState, target: CopyTarget) -> UpdateResult {
    let ticks = state.settings.ui.copy_notice_ticks;
    if let Some(review) = state.review_mut() {
        review.show_notice(target.notice(), ticks);
    }
    UpdateResult::none()
}

pub fn handle_copy_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Clipboard write failed: {}", error);
    state.alert = Some(Alert::error(format!("Could not copy: {error}")));
    UpdateResult::none()
}

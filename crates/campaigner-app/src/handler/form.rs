//! Campaign form handlers: editing, preview and the submit round trip

use chrono::Utc;
use serde_json::Value;

use campaigner_core::prelude::*;
use campaigner_core::{CampaignData, ValidationAttempt};

use crate::form::{CampaignForm, FormField};
use crate::message::Message;
use crate::review::{MockWebhookSummary, Review};
use crate::state::{Alert, AppState, Screen};
use crate::submission;

use super::{UpdateAction, UpdateResult};

/// Run `f` on the form if the editing screen is showing
pub fn with_form(state: &mut AppState, f: impl FnOnce(&mut CampaignForm)) -> UpdateResult {
    if let Some(form) = state.form_mut() {
        f(form);
    }
    UpdateResult::none()
}

/// Enter/Space on the focused element
pub fn handle_activate_focused(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.form_mut() else {
        return UpdateResult::none();
    };

    match form.focus {
        FormField::Published => form.toggle_published(),
        FormField::Roles => form.toggle_role_at_cursor(),
        FormField::Estado => form.cycle_estado(true),
        FormField::PreviewButton => return UpdateResult::message(Message::Preview),
        FormField::SubmitButton => return UpdateResult::message(Message::Submit),
        _ => form.focus_next(),
    }
    UpdateResult::none()
}

/// Validate and open the JSON preview
pub fn handle_preview(state: &mut AppState) -> UpdateResult {
    let preview_url = state.settings.webhook.preview_url.clone();
    let random = state.random.clone();

    let Some(form) = state.form_mut() else {
        return UpdateResult::none();
    };

    let campaign = form.committed_data();
    if let Err(e) = campaign.validate() {
        debug!("Preview refused: missing {:?}", e.missing);
        state.alert = Some(Alert::validation(e.message(ValidationAttempt::Preview)));
        return UpdateResult::none();
    }

    let payload = submission::preview_payload(campaign, &preview_url, random.as_ref(), Utc::now());
    form.open_preview(payload);
    UpdateResult::none()
}

/// Validate, mark the form as submitting and hand the request to the
/// event loop
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let base_url = state.settings.webhook.url.clone();

    let Some(form) = state.form_mut() else {
        return UpdateResult::none();
    };

    if form.submitting {
        debug!("Submit ignored: a request is already in flight");
        return UpdateResult::none();
    }

    let campaign = form.committed_data();
    if let Err(e) = campaign.validate() {
        debug!("Submit refused: missing {:?}", e.missing);
        state.alert = Some(Alert::validation(e.message(ValidationAttempt::Submit)));
        return UpdateResult::none();
    }

    let url = match submission::prepare_request(&base_url, &campaign, Utc::now()) {
        Ok(url) => url,
        Err(e) => {
            state.alert = Some(Alert::error(e.to_string()));
            return UpdateResult::none();
        }
    };

    form.submitting = true;
    form.request_url = Some(url.to_string());
    state.alert = None;
    info!("Submitting campaign {:?}", campaign.name);
    UpdateResult::action(UpdateAction::SubmitCampaign { campaign, url })
}

/// The webhook request finished. Always clears `submitting` first.
pub fn handle_submit_completed(
    state: &mut AppState,
    campaign: CampaignData,
    url: String,
    outcome: std::result::Result<Value, String>,
) -> UpdateResult {
    let Screen::Editing(form) = &mut state.screen else {
        debug!("Ignoring submit result that arrived after leaving the form");
        return UpdateResult::none();
    };
    form.submitting = false;
    form.request_url = None;

    match outcome {
        Ok(response) => {
            let now = Utc::now();
            let payload =
                submission::build_payload(campaign, &url, response, state.random.as_ref(), now);
            let summary = MockWebhookSummary::generate(&payload, state.random.as_ref(), now);
            info!(
                "Integration created for {:?} ({} expected users)",
                payload.campaign.name, payload.expected_users
            );
            state.alert = None;
            state.screen = Screen::Reviewing(Box::new(Review::new(payload, summary)));
        }
        Err(error) => {
            warn!("Submission failed: {}", error);
            state.alert = Some(Alert::error(error));
        }
    }
    UpdateResult::none()
}

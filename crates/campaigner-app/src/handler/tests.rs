//! Tests for handler module

use std::sync::Arc;

use super::*;
use crate::form::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::random::FixedRandom;
use crate::state::{AlertKind, AppState, Screen};
use campaigner_core::{CampaignData, FieldEdit, FilterField, AVAILABLE_ROLES};

fn test_state() -> AppState {
    AppState::new().with_random(Arc::new(FixedRandom::new(0)))
}

/// Run a message and any follow-ups, collecting actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

fn form_data(state: &AppState) -> &CampaignData {
    &state.form().expect("editing screen").data
}

fn valid_state() -> AppState {
    let mut state = test_state();
    run(&mut state, Message::Edit(FieldEdit::Name("X".into())));
    run(&mut state, Message::Edit(FieldEdit::SegmentName("Y".into())));
    run(&mut state, Message::Edit(FieldEdit::ToggleRole("Admin".into())));
    state
}

fn submit_and_complete(state: &mut AppState, outcome: Result<serde_json::Value, String>) {
    let actions = run(state, Message::Submit);
    let Some(UpdateAction::SubmitCampaign { campaign, url }) = actions.into_iter().next() else {
        panic!("expected a submit action");
    };
    run(
        state,
        Message::SubmitCompleted {
            campaign,
            url: url.to_string(),
            outcome,
        },
    );
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = test_state();
    assert!(!state.should_quit());
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_anywhere() {
    let mut state = valid_state();
    state.alert = Some(crate::state::Alert::error("hello"));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_escape_on_form_quits() {
    let state = test_state();
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::Quit)
    ));
}

#[test]
fn test_q_on_form_is_typed_not_quit() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    assert_eq!(state.form().unwrap().draft, "q");
}

// ─────────────────────────────────────────────────────────
// Editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_name_fills_segment_once() {
    let mut state = test_state();
    type_text(&mut state, "Test");
    press(&mut state, InputKey::Tab);
    assert_eq!(form_data(&state).segment_name, "Segmento Test");

    press(&mut state, InputKey::BackTab);
    type_text(&mut state, "ing");
    press(&mut state, InputKey::Tab);
    assert_eq!(form_data(&state).name, "Testing");
    assert_eq!(form_data(&state).segment_name, "Segmento Test");
}

#[test]
fn test_name_edit_does_not_overwrite_existing_segment() {
    let mut state = test_state();
    run(&mut state, Message::Edit(FieldEdit::SegmentName("Mine".into())));
    run(&mut state, Message::Edit(FieldEdit::Name("Test".into())));
    assert_eq!(form_data(&state).segment_name, "Mine");
}

#[test]
fn test_single_field_edit_leaves_others_unchanged() {
    let mut state = valid_state();
    let before = form_data(&state).clone();

    run(
        &mut state,
        Message::Edit(FieldEdit::Filter(FilterField::Cidade, "Recife".into())),
    );

    let after = form_data(&state);
    assert_eq!(after.filters.cidade, "Recife");
    assert_eq!(
        after,
        &before.with_filter(FilterField::Cidade, "Recife")
    );
    assert_eq!(after.name, before.name);
    assert_eq!(after.roles, before.roles);
    assert_eq!(after.mautic_settings, before.mautic_settings);
}

#[test]
fn test_ctrl_u_clears_focused_field() {
    let mut state = test_state();
    type_text(&mut state, "Promo");
    press(&mut state, InputKey::CharCtrl('u'));
    assert_eq!(state.form().unwrap().draft, "");
}

#[test]
fn test_space_toggles_role_under_cursor_twice() {
    let mut state = test_state();
    state.form_mut().unwrap().set_focus(FormField::Roles);
    press(&mut state, InputKey::Down);

    press(&mut state, InputKey::Char(' '));
    assert_eq!(form_data(&state).roles, vec![AVAILABLE_ROLES[1]]);

    press(&mut state, InputKey::Char(' '));
    assert!(form_data(&state).roles.is_empty());
}

#[test]
fn test_space_toggles_publish_checkbox() {
    let mut state = test_state();
    state.form_mut().unwrap().set_focus(FormField::Published);
    press(&mut state, InputKey::Char(' '));
    assert!(!form_data(&state).mautic_settings.is_published);
    press(&mut state, InputKey::Enter);
    assert!(form_data(&state).mautic_settings.is_published);
}

#[test]
fn test_estado_arrows_cycle() {
    let mut state = test_state();
    state.form_mut().unwrap().set_focus(FormField::Estado);
    press(&mut state, InputKey::Right);
    assert_eq!(form_data(&state).filters.estado, "AC");
    press(&mut state, InputKey::Left);
    assert_eq!(form_data(&state).filters.estado, "");
    assert_eq!(state.form().unwrap().focus, FormField::Estado);
}

#[test]
fn test_enter_on_text_field_moves_focus() {
    let mut state = test_state();
    press(&mut state, InputKey::Enter);
    assert_eq!(state.form().unwrap().focus, FormField::SegmentName);
}

// ─────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_refused_without_required_fields() {
    let mut state = test_state();
    run(&mut state, Message::Edit(FieldEdit::Name("Only name".into())));
    let before = form_data(&state).clone();

    let actions = run(&mut state, Message::Submit);

    assert!(actions.is_empty());
    assert_eq!(form_data(&state), &before);
    assert!(!state.is_submitting());
    let alert = state.alert.as_ref().unwrap();
    assert_eq!(alert.kind, AlertKind::Validation);
    assert!(alert.message.contains("select at least one role"));
}

#[test]
fn test_submit_refused_for_blank_name() {
    let mut state = valid_state();
    run(&mut state, Message::Edit(FieldEdit::Name("   ".into())));
    let actions = run(&mut state, Message::Submit);
    assert!(actions.is_empty());
    assert!(state.alert.is_some());
}

#[test]
fn test_preview_refused_without_required_fields() {
    let mut state = test_state();
    let before = form_data(&state).clone();

    run(&mut state, Message::Preview);

    let form = state.form().unwrap();
    assert!(form.preview.is_none());
    assert_eq!(form.data, before);
    assert!(state
        .alert
        .as_ref()
        .unwrap()
        .message
        .ends_with("before previewing."));
}

#[test]
fn test_alert_swallows_keys_until_dismissed() {
    let mut state = test_state();
    run(&mut state, Message::Submit);
    assert!(state.alert.is_some());

    press(&mut state, InputKey::Char('a'));
    assert_eq!(state.form().unwrap().draft, "");

    press(&mut state, InputKey::Enter);
    assert!(state.alert.is_none());
}

// ─────────────────────────────────────────────────────────
// Preview
// ─────────────────────────────────────────────────────────

#[test]
fn test_preview_opens_and_closes_without_changes() {
    let mut state = valid_state();
    let before = form_data(&state).clone();

    press(&mut state, InputKey::CharCtrl('p'));
    let preview = state.form().unwrap().preview.clone().expect("preview open");
    assert_eq!(preview.payload.campaign, before);
    assert_eq!(preview.payload.expected_users, 50);
    assert!(preview.payload.webhook_response.is_none());
    assert_eq!(
        preview.payload.webhook_url,
        state.settings.webhook.preview_url
    );

    press(&mut state, InputKey::Esc);
    assert!(state.form().unwrap().preview.is_none());
    assert_eq!(form_data(&state), &before);
    assert!(!state.should_quit());
}

#[test]
fn test_preview_includes_uncommitted_draft() {
    let mut state = test_state();
    run(&mut state, Message::Edit(FieldEdit::ToggleRole("Admin".into())));
    type_text(&mut state, "Draft");

    run(&mut state, Message::Preview);

    let preview = state.form().unwrap().preview.as_ref().unwrap();
    assert_eq!(preview.payload.campaign.name, "Draft");
    assert_eq!(preview.payload.campaign.segment_name, "Segmento Draft");
}

// ─────────────────────────────────────────────────────────
// Submit
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_returns_action_and_marks_submitting() {
    let mut state = valid_state();

    let actions = run(&mut state, Message::Submit);

    assert_eq!(actions.len(), 1);
    match &actions[0] {
        UpdateAction::SubmitCampaign { campaign, url } => {
            assert_eq!(campaign, form_data(&state));
            assert!(url
                .as_str()
                .starts_with(&format!("{}?name=X&segmentName=Y&roles=Admin", state.settings.webhook.url)));
        }
        other => panic!("unexpected action: {:?}", other),
    }
    assert!(state.is_submitting());
    assert_eq!(state.form().unwrap().submit_label(), "Creating in Mautic...");
}

#[test]
fn test_submit_ignored_while_submitting() {
    let mut state = valid_state();
    run(&mut state, Message::Submit);
    let actions = run(&mut state, Message::Submit);
    assert!(actions.is_empty());
}

#[test]
fn test_invalid_base_url_shows_error() {
    let mut state = valid_state();
    state.settings.webhook.url = "::not a url::".into();

    let actions = run(&mut state, Message::Submit);

    assert!(actions.is_empty());
    assert!(!state.is_submitting());
    assert_eq!(state.alert.as_ref().unwrap().kind, AlertKind::Error);
}

#[test]
fn test_successful_completion_switches_to_review() {
    let mut state = valid_state();
    submit_and_complete(&mut state, Ok(serde_json::json!({"ok": true})));

    let review = state.review().expect("review screen");
    assert_eq!(review.payload.campaign.name, "X");
    assert_eq!(
        review.payload.webhook_response,
        Some(serde_json::json!({"ok": true}))
    );
    assert_eq!(review.payload.action, "create_mautic_campaign_and_segment");
    assert_eq!(review.summary.users_added_to_segment, 50);
    assert!(state.alert.is_none());
}

#[test]
fn test_failed_completion_keeps_form_and_clears_submitting() {
    let mut state = valid_state();
    let before = form_data(&state).clone();
    submit_and_complete(
        &mut state,
        Err("Webhook request failed: 500 Internal Server Error".into()),
    );

    assert!(state.review().is_none());
    assert!(!state.is_submitting());
    assert_eq!(form_data(&state), &before);
    let alert = state.alert.as_ref().unwrap();
    assert_eq!(alert.kind, AlertKind::Error);
    assert!(alert.message.contains("500"));
}

#[test]
fn test_stale_completion_ignored_while_reviewing() {
    let mut state = valid_state();
    submit_and_complete(&mut state, Ok(serde_json::json!({"first": true})));

    run(
        &mut state,
        Message::SubmitCompleted {
            campaign: CampaignData::default(),
            url: "https://example.com".into(),
            outcome: Ok(serde_json::json!({"second": true})),
        },
    );

    let review = state.review().unwrap();
    assert_eq!(
        review.payload.webhook_response,
        Some(serde_json::json!({"first": true}))
    );
}

// ─────────────────────────────────────────────────────────
// Review
// ─────────────────────────────────────────────────────────

#[test]
fn test_review_keys() {
    let mut state = valid_state();
    submit_and_complete(&mut state, Ok(serde_json::json!({})));

    let actions = press(&mut state, InputKey::Char('u'));
    let url = state.review().unwrap().payload.webhook_url.clone();
    assert_eq!(
        actions,
        vec![UpdateAction::CopyToClipboard {
            text: url,
            target: crate::CopyTarget::WebhookUrl,
        }]
    );

    let actions = press(&mut state, InputKey::Char('c'));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::CopyToClipboard {
            target: crate::CopyTarget::Payload,
            ..
        }]
    ));

    press(&mut state, InputKey::Char('n'));
    assert!(matches!(state.screen, Screen::Editing(_)));
    assert_eq!(form_data(&state), &CampaignData::default());
}

#[test]
fn test_copied_notice_expires_with_ticks() {
    let mut state = valid_state();
    state.settings.ui.copy_notice_ticks = 2;
    submit_and_complete(&mut state, Ok(serde_json::json!({})));

    run(
        &mut state,
        Message::Copied {
            target: crate::CopyTarget::Payload,
        },
    );
    assert_eq!(
        state.review().unwrap().notice.as_ref().unwrap().text,
        "Payload copied to clipboard"
    );

    run(&mut state, Message::Tick);
    run(&mut state, Message::Tick);
    assert!(state.review().unwrap().notice.is_none());
}

#[test]
fn test_q_on_review_quits() {
    let mut state = valid_state();
    submit_and_complete(&mut state, Ok(serde_json::json!({})));
    press(&mut state, InputKey::Char('q'));
    assert!(state.should_quit());
}

#[test]
fn test_review_scrolling_clamps() {
    let mut state = valid_state();
    submit_and_complete(&mut state, Ok(serde_json::json!({})));
    state
        .review_mut()
        .unwrap()
        .scroll
        .update_content_size(40, 10);

    press(&mut state, InputKey::End);
    assert_eq!(state.review().unwrap().scroll.offset, 30);
    press(&mut state, InputKey::Up);
    assert_eq!(state.review().unwrap().scroll.offset, 29);
    press(&mut state, InputKey::Home);
    assert_eq!(state.review().unwrap().scroll.offset, 0);
}

//! Full-screen rendering tests for `view`

use super::view;
use crate::test_utils::{apply, create_test_state, typed, TestTerminal};
use campaigner_app::{AppState, FixedRandom, Message};
use serde_json::json;
use std::sync::Arc;

fn draw(term: &mut TestTerminal, state: &mut AppState) {
    term.draw_with(|frame| view(frame, state));
}

/// Name "Promo" with role Admin, focus on the role list
fn filled_state() -> AppState {
    let mut state = create_test_state().with_random(Arc::new(FixedRandom::new(0)));
    apply(&mut state, typed("Promo"));
    apply(
        &mut state,
        [
            Message::FocusNext,
            Message::FocusNext,
            Message::FocusNext,
            Message::FocusNext,
            Message::FocusNext,
            Message::ToggleRoleAtCursor,
        ],
    );
    state
}

fn completed(state: &mut AppState) {
    let campaign = state.form_mut().unwrap().committed_data();
    apply(
        state,
        [Message::SubmitCompleted {
            campaign,
            url: "https://hook.test/webhook?name=Promo&segmentName=Segmento+Promo&roles=Admin"
                .to_string(),
            outcome: Ok(json!({"ok": true})),
        }],
    );
}

#[test]
fn test_initial_screen_shows_header_form_and_footer() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();
    draw(&mut term, &mut state);

    assert!(term.line_contains(1, "Mautic Campaigner"));
    assert!(term.line_contains(1, "New campaign"));
    assert!(term.buffer_contains("Campaign name *"));
    assert!(term.line_contains(23, "Ctrl+S create"));
}

#[test]
fn test_validation_alert_overlays_form() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();
    apply(&mut state, [Message::Submit]);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Missing information"));
    assert!(term.buffer_contains("Enter to dismiss"));
    assert!(term.line_contains(23, "Enter dismiss"));
}

#[test]
fn test_preview_modal_renders_payload() {
    let mut term = TestTerminal::with_size(100, 40);
    let mut state = filled_state();
    apply(&mut state, [Message::Preview]);
    assert!(state.alert.is_none());
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("JSON preview"));
    assert!(term.buffer_contains("\"segmentName\": \"Segmento Promo\""));
    assert!(term.buffer_contains("your-n8n-instance.com"));

    let preview = state.form().unwrap().preview.as_ref().unwrap();
    assert!(preview.scroll.visible_lines > 0);
}

#[test]
fn test_successful_submission_shows_success_view() {
    let mut term = TestTerminal::with_size(100, 60);
    let mut state = filled_state();
    completed(&mut state);
    draw(&mut term, &mut state);

    assert!(term.line_contains(1, "Integration created"));
    assert!(term.buffer_contains("Webhook response"));
    assert!(term.buffer_contains("\"ok\": true"));
    assert!(term.buffer_contains("c copy payload"));

    let review = state.review().unwrap();
    assert!(review.scroll.total_lines > 0);
    assert_eq!(review.scroll.visible_lines, 54);
}

#[test]
fn test_copy_notice_replaces_footer_hints() {
    let mut term = TestTerminal::new();
    let mut state = filled_state();
    completed(&mut state);
    apply(
        &mut state,
        [Message::Copied {
            target: campaigner_app::CopyTarget::Payload,
        }],
    );
    draw(&mut term, &mut state);

    assert!(term.line_contains(23, "Payload copied to clipboard"));
    assert!(!term.line_contains(23, "copy URL"));
}

#[test]
fn test_review_scroll_is_clamped_after_resize() {
    let mut state = filled_state();
    completed(&mut state);

    let mut small = TestTerminal::new();
    draw(&mut small, &mut state);
    apply(&mut state, [Message::ScrollToBottom]);
    let bottom = state.review().unwrap().scroll.offset;
    assert!(bottom > 0);

    let mut tall = TestTerminal::with_size(100, 80);
    draw(&mut tall, &mut state);
    assert_eq!(state.review().unwrap().scroll.offset, 0);
}

#[test]
fn test_new_integration_returns_to_empty_form() {
    let mut term = TestTerminal::new();
    let mut state = filled_state();
    completed(&mut state);
    apply(&mut state, [Message::NewIntegration]);
    draw(&mut term, &mut state);

    assert!(term.line_contains(1, "New campaign"));
    assert!(term.buffer_contains("0 selected"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut term = TestTerminal::compact();
    let mut state = filled_state();
    apply(&mut state, [Message::Preview]);
    draw(&mut term, &mut state);

    completed_from_preview(&mut state);
    draw(&mut term, &mut state);
}

fn completed_from_preview(state: &mut AppState) {
    apply(state, [Message::ClosePreview]);
    completed(state);
}

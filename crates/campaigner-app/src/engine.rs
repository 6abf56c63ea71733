//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the webhook client and
//! the clipboard. Front ends feed it messages; it runs them through the
//! update loop and broadcasts [`EngineEvent`]s describing what changed.

use tokio::sync::{broadcast, mpsc};

use campaigner_core::IntegrationPayload;
use campaigner_webhook::WebhookClient;

use crate::clipboard::Clipboard;
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::random::SharedRandom;
use crate::review::MockWebhookSummary;
use crate::state::{Alert, AlertKind, AppState};

/// Domain events emitted after each message processing cycle
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Preview or submit was refused for missing fields
    ValidationFailed { message: String },

    /// The JSON preview opened
    PreviewReady { payload: IntegrationPayload },

    /// A webhook request was started
    SubmitStarted { url: String },

    /// The webhook succeeded and the review screen opened
    IntegrationCreated {
        payload: IntegrationPayload,
        summary: MockWebhookSummary,
    },

    /// A webhook, URL or clipboard error was shown
    Error { message: String },
}

/// Lightweight snapshot of state for change detection.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    submitting: bool,
    reviewing: bool,
    preview_open: bool,
    alert: Option<Alert>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        let form = state.form();
        Self {
            submitting: state.is_submitting(),
            reviewing: state.review().is_some(),
            preview_open: form.is_some_and(|f| f.preview.is_some()),
            alert: state.alert.clone(),
        }
    }
}

/// Orchestration engine for Mautic Campaigner.
pub struct Engine<C> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    client: C,

    clipboard: Box<dyn Clipboard>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<C> Engine<C>
where
    C: WebhookClient + Clone + Sync + 'static,
{
    /// Create an engine with a fresh form
    pub fn new(settings: Settings, client: C, clipboard: Box<dyn Clipboard>) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(64);

        Self {
            state,
            msg_tx,
            msg_rx,
            client,
            clipboard,
            event_tx,
        }
    }

    /// Replace the random source used for cosmetic figures
    pub fn with_random(mut self, random: SharedRandom) -> Self {
        self.state.random = random;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Subscribe to engine events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.client,
            self.clipboard.as_mut(),
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message (e.g. a finished webhook request)
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.alert != pre.alert {
            if let Some(alert) = &post.alert {
                let message = alert.message.clone();
                match alert.kind {
                    AlertKind::Validation => self.emit(EngineEvent::ValidationFailed { message }),
                    AlertKind::Error => self.emit(EngineEvent::Error { message }),
                }
            }
        }

        if !pre.preview_open && post.preview_open {
            if let Some(preview) = self.state.form().and_then(|f| f.preview.as_ref()) {
                self.emit(EngineEvent::PreviewReady {
                    payload: preview.payload.clone(),
                });
            }
        }

        if !pre.submitting && post.submitting {
            if let Some(url) = self.state.form().and_then(|f| f.request_url.clone()) {
                self.emit(EngineEvent::SubmitStarted { url });
            }
        }

        if !pre.reviewing && post.reviewing {
            if let Some(review) = self.state.review() {
                self.emit(EngineEvent::IntegrationCreated {
                    payload: review.payload.clone(),
                    summary: review.summary.clone(),
                });
            }
        }
    }

    /// send() returns Err only if there are no receivers
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}

//! Headless mode runner - one preview or submission without the TUI

use std::io::Write;

use tokio::sync::broadcast::{self, error::TryRecvError};

use campaigner_app::config::Settings;
use campaigner_app::{signals, Engine, EngineEvent, MemoryClipboard, Message};
use campaigner_core::prelude::*;
use campaigner_webhook::{HttpWebhookClient, WebhookClient};

use super::{CampaignInput, HeadlessEvent};

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    /// `--preview`: the payload was printed
    Previewed,
    /// The webhook accepted the campaign
    Created,
    /// Required fields were missing
    ValidationFailed,
    /// Webhook, URL or input error
    Failed,
    /// SIGINT/SIGTERM before the webhook answered
    Interrupted,
}

impl HeadlessOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Previewed | Self::Created)
    }

    /// Process exit code for this outcome
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Previewed | Self::Created => 0,
            Self::ValidationFailed => 2,
            Self::Failed => 1,
            Self::Interrupted => 130,
        }
    }
}

/// Run in headless mode against the configured webhook, printing NDJSON to
/// stdout
pub async fn run_headless(
    settings: Settings,
    input: CampaignInput,
    preview: bool,
) -> Result<HeadlessOutcome> {
    info!("Campaigner starting in HEADLESS mode");

    let client = HttpWebhookClient::new(settings.webhook.timeout())?;
    let mut engine = Engine::new(settings, client, Box::new(MemoryClipboard::default()));
    signals::spawn_signal_handler(engine.msg_sender());

    let mut stdout = std::io::stdout();
    let outcome = run_with_engine(&mut engine, &input, preview, &mut stdout).await?;

    info!("Campaigner headless mode exiting: {:?}", outcome);
    Ok(outcome)
}

/// Drive `engine` through the form edits, then one preview or submit,
/// writing every event to `out`
pub async fn run_with_engine<C, W>(
    engine: &mut Engine<C>,
    input: &CampaignInput,
    preview: bool,
    out: &mut W,
) -> Result<HeadlessOutcome>
where
    C: WebhookClient + Clone + Sync + 'static,
    W: Write + ?Sized,
{
    if let Err(message) = input.check() {
        HeadlessEvent::error(message, true).write_to(out)?;
        return Ok(HeadlessOutcome::Failed);
    }

    let mut events = engine.subscribe();

    for edit in input.edits() {
        engine.process_message(Message::Edit(edit));
    }
    engine.process_message(if preview {
        Message::Preview
    } else {
        Message::Submit
    });

    let mut outcome = forward_events(&mut events, out)?;

    // Wait for the webhook task to report back
    while outcome.is_none() && engine.state.is_submitting() {
        let Some(message) = engine.next_message().await else {
            warn!("Message channel closed while the request was in flight");
            break;
        };
        engine.process_message(message);
        outcome = forward_events(&mut events, out)?;

        if engine.should_quit() {
            HeadlessEvent::error("Interrupted before the webhook answered", true).write_to(out)?;
            return Ok(HeadlessOutcome::Interrupted);
        }
    }

    Ok(outcome.unwrap_or(HeadlessOutcome::Failed))
}

/// Write every pending engine event; returns the outcome once one is known
fn forward_events<W: Write + ?Sized>(
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Result<Option<HeadlessOutcome>> {
    let mut outcome = None;
    loop {
        let event = match events.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} events", skipped);
                continue;
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        };

        outcome = match &event {
            EngineEvent::ValidationFailed { .. } => Some(HeadlessOutcome::ValidationFailed),
            EngineEvent::PreviewReady { .. } => Some(HeadlessOutcome::Previewed),
            EngineEvent::IntegrationCreated { .. } => Some(HeadlessOutcome::Created),
            EngineEvent::Error { .. } => Some(HeadlessOutcome::Failed),
            EngineEvent::SubmitStarted { .. } => outcome,
        };
        HeadlessEvent::from(event).write_to(out)?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(HeadlessOutcome::Created.exit_code(), 0);
        assert_eq!(HeadlessOutcome::Previewed.exit_code(), 0);
        assert_ne!(HeadlessOutcome::ValidationFailed.exit_code(), 0);
        assert_ne!(HeadlessOutcome::Failed.exit_code(), 0);
        assert!(!HeadlessOutcome::Interrupted.is_success());
    }
}

//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use url::Url;

use campaigner_core::prelude::*;
use campaigner_core::CampaignData;
use campaigner_webhook::WebhookClient;

use crate::clipboard::Clipboard;
use crate::message::Message;
use crate::submission;
use crate::UpdateAction;

/// Execute an action: spawn the webhook request or write the clipboard
pub fn handle_action<C>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    client: &C,
    clipboard: &mut dyn Clipboard,
) where
    C: WebhookClient + Clone + Sync + 'static,
{
    match action {
        UpdateAction::SubmitCampaign { campaign, url } => {
            let client = client.clone();
            tokio::spawn(async move {
                execute_submission(client, campaign, url, msg_tx).await;
            });
        }

        UpdateAction::CopyToClipboard { text, target } => {
            let msg = match clipboard.copy(&text) {
                Ok(()) => Message::Copied { target },
                Err(e) => Message::CopyFailed {
                    error: e.to_string(),
                },
            };
            if let Err(e) = msg_tx.try_send(msg) {
                warn!("Failed to report clipboard result: {}", e);
            }
        }
    }
}

/// Run one webhook request and report exactly one `SubmitCompleted`
pub async fn execute_submission<C: WebhookClient + Sync>(
    client: C,
    campaign: CampaignData,
    url: Url,
    msg_tx: mpsc::Sender<Message>,
) {
    let outcome = submission::send(&client, &url)
        .await
        .map_err(|e| e.to_string());

    let msg = Message::SubmitCompleted {
        campaign,
        url: url.to_string(),
        outcome,
    };
    if msg_tx.send(msg).await.is_err() {
        warn!("Submission finished after the event loop shut down");
    }
}

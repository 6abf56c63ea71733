//! Message processing
//!
//! Runs a message through the TEA update function, following up chained
//! messages and dispatching any actions they return.

use tokio::sync::mpsc;

use campaigner_webhook::WebhookClient;

use crate::actions::handle_action;
use crate::clipboard::Clipboard;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &C,
    clipboard: &mut dyn Clipboard,
) where
    C: WebhookClient + Clone + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client, clipboard);
        }

        msg = result.message;
    }
}

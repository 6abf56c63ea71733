//! Main TUI runner - entry point and event loop

use campaigner_app::config::Settings;
use campaigner_app::signals;
use campaigner_app::Engine;
use campaigner_core::prelude::*;
use campaigner_webhook::{HttpWebhookClient, WebhookClient};

use crate::clipboard::Osc52Clipboard;
use crate::{event, render, terminal};

/// Run the interactive form until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    let client = HttpWebhookClient::new(settings.webhook.timeout())?;
    info!(
        "Webhook {} (timeout: {:?})",
        settings.webhook.url,
        client.timeout()
    );

    let mut engine = Engine::new(settings, client, Box::new(Osc52Clipboard::new()));

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(engine.msg_sender());

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let result = run_loop(&mut term, &mut engine);

    ratatui::restore();
    info!("Campaigner exiting");
    result
}

/// Main event loop: drain background results, draw, poll the terminal
fn run_loop<C>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<C>) -> Result<()>
where
    C: WebhookClient + Clone + Sync + 'static,
{
    while !engine.should_quit() {
        // Webhook completions, clipboard results and signals
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal
            .draw(|frame| render::view(frame, &mut engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}

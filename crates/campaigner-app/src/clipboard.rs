//! Write-only clipboard seam
//!
//! The TUI writes through the terminal (OSC 52); tests and headless mode use
//! [`MemoryClipboard`].

use std::sync::{Arc, Mutex};

use campaigner_core::prelude::*;

/// What the user asked to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// Full `IntegrationPayload` as pretty JSON
    Payload,
    /// The webhook URL that was invoked
    WebhookUrl,
}

impl CopyTarget {
    pub fn notice(self) -> &'static str {
        match self {
            CopyTarget::Payload => "Payload copied to clipboard",
            CopyTarget::WebhookUrl => "Webhook URL copied to clipboard",
        }
    }
}

pub trait Clipboard: Send {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Keeps every copied text in memory; clones share the same history
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    history: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn history(&self) -> Vec<String> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.history().pop()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.history
            .lock()
            .map_err(|_| Error::clipboard("clipboard history poisoned"))?
            .push(text.to_string());
        Ok(())
    }
}

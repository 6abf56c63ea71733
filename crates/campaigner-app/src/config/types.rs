//! Configuration types for Mautic Campaigner
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `WebhookSettings` - Where and how the campaign webhook is called
//! - `UiSettings` - Presentation tweaks

use serde::{Deserialize, Serialize};
use std::time::Duration;

use campaigner_webhook::{DEFAULT_PREVIEW_URL, DEFAULT_WEBHOOK_URL};

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub webhook: WebhookSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Webhook endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebhookSettings {
    /// Base URL the campaign query string is appended to
    #[serde(default = "default_webhook_url")]
    pub url: String,

    /// Request timeout in seconds; `0` waits forever
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// URL shown in previews (never requested)
    #[serde(default = "default_preview_url")]
    pub preview_url: String,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            url: default_webhook_url(),
            timeout_secs: default_timeout_secs(),
            preview_url: default_preview_url(),
        }
    }
}

impl WebhookSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn default_webhook_url() -> String {
    DEFAULT_WEBHOOK_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_preview_url() -> String {
    DEFAULT_PREVIEW_URL.to_string()
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How many ticks (50ms each) a "copied" notice stays visible
    #[serde(default = "default_copy_notice_ticks")]
    pub copy_notice_ticks: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            copy_notice_ticks: default_copy_notice_ticks(),
        }
    }
}

fn default_copy_notice_ticks() -> u16 {
    40
}

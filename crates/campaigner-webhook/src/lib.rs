//! # campaigner-webhook - Outbound Webhook Layer
//!
//! Everything that touches the wire: building the query string the n8n flow
//! reads, the [`WebhookClient`] seam, the reqwest-backed [`HttpWebhookClient`]
//! and the rules for turning an HTTP reply into a `webhookResponse` value.
//!
//! ## Public API
//!
//! - [`build_webhook_url()`] / [`query_pairs()`] - Deterministic request URL
//! - [`WebhookClient`] - Async GET abstraction (Send variant of [`LocalWebhookClient`])
//! - [`HttpWebhookClient`] - Production client with optional timeout
//! - [`WebhookReply`], [`interpret_reply()`] - Status check + lenient JSON parsing
//!
//! Enable the `test-helpers` feature for [`test_utils::StubWebhookClient`].

pub mod client;
pub mod query;
pub mod reply;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{HttpWebhookClient, LocalWebhookClient, WebhookClient};
pub use query::{build_webhook_url, query_pairs, DEFAULT_PREVIEW_URL, DEFAULT_WEBHOOK_URL};
pub use reply::{interpret_reply, lenient_success, WebhookReply};

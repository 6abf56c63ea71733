//! Interpretation of webhook replies

use campaigner_core::prelude::*;
use serde_json::{json, Value};

/// Raw reply as received from the webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReply {
    pub status: u16,
    /// Reason phrase for `status` ("OK", "Internal Server Error", ...)
    pub reason: String,
    pub body: String,
}

impl WebhookReply {
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Substitute used when a successful reply carries no JSON
pub fn lenient_success() -> Value {
    json!({ "success": true })
}

/// Turn a reply into the `webhookResponse` value.
///
/// Non-2xx statuses are errors. A 2xx body that is not JSON (including an
/// empty body) is not: it degrades to `{"success": true}`.
pub fn interpret_reply(reply: WebhookReply) -> Result<Value> {
    if !reply.is_success() {
        return Err(Error::webhook_status(reply.status, reply.reason));
    }

    match serde_json::from_str(&reply.body) {
        Ok(value) => Ok(value),
        Err(e) => {
            debug!(
                "Webhook returned {} with a non-JSON body ({}), assuming success",
                reply.status, e
            );
            Ok(lenient_success())
        }
    }
}

//! Webhook client abstraction and the reqwest implementation

use std::time::Duration;

use campaigner_core::prelude::*;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::reply::WebhookReply;

/// Issues the single GET a submission makes.
///
/// Implement [`WebhookClient`] (the `Send` variant) so the request can run on
/// a spawned tokio task; [`LocalWebhookClient`] comes for free.
#[trait_variant::make(WebhookClient: Send)]
pub trait LocalWebhookClient {
    /// GET `url` and return the raw reply.
    ///
    /// Any HTTP status is a successful reply at this level; only transport
    /// failures (DNS, connection, timeout) are errors.
    async fn get(&self, url: &Url) -> Result<WebhookReply>;
}

/// Production client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpWebhookClient {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpWebhookClient {
    /// Build a client. `None` waits for the webhook indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::webhook_transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        match self.timeout {
            Some(timeout) if err.is_timeout() => Error::webhook_transport(format!(
                "no response within {}s",
                timeout.as_secs_f32()
            )),
            _ => Error::webhook_transport(err.to_string()),
        }
    }
}

impl WebhookClient for HttpWebhookClient {
    async fn get(&self, url: &Url) -> Result<WebhookReply> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();

        // An unreadable body on a 2xx is treated like a non-JSON one.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read webhook body ({}): {}", status, e);
                String::new()
            }
        };

        debug!("Webhook replied {} ({} bytes)", status, body.len());
        Ok(WebhookReply::new(status.as_u16(), reason, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_timeout_disables_deadline() {
        let client = HttpWebhookClient::new(None).unwrap();
        assert_eq!(client.timeout(), None);
    }

    #[test]
    fn test_timeout_secs_applied() {
        let client = HttpWebhookClient::new(Some(Duration::from_secs(30))).unwrap();
        assert_eq!(client.timeout(), Some(Duration::from_secs(30)));
    }
}

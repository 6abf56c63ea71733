//! Scripted webhook client for tests
//!
//! Available with the `test-helpers` feature (and inside this crate's own
//! tests). Replies are consumed in order; once the script runs out the last
//! reply keeps being returned.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use campaigner_core::prelude::*;
use url::Url;

use crate::client::WebhookClient;
use crate::reply::WebhookReply;

/// One scripted outcome
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Return this HTTP reply
    Reply(WebhookReply),
    /// Fail as if the connection could not be made
    Transport(String),
    /// Never complete, like an endpoint that accepts and then hangs
    Pending,
}

/// A [`WebhookClient`] that records requested URLs and replays a script
#[derive(Debug, Clone, Default)]
pub struct StubWebhookClient {
    script: Arc<Mutex<VecDeque<StubReply>>>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl StubWebhookClient {
    pub fn new(script: impl IntoIterator<Item = StubReply>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into_iter().collect())),
            requests: Arc::default(),
        }
    }

    /// Always reply with `status` and `body`
    pub fn replying(status: u16, body: impl Into<String>) -> Self {
        let reason = match status {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            400 => "Bad Request",
            404 => "Not Found",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            _ => "",
        };
        Self::new([StubReply::Reply(WebhookReply::new(status, reason, body))])
    }

    /// Always fail at the transport level
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::new([StubReply::Transport(message.into())])
    }

    /// Never answer
    pub fn hanging() -> Self {
        Self::new([StubReply::Pending])
    }

    /// URLs requested so far
    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    fn next_reply(&self) -> StubReply {
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            script
                .front()
                .cloned()
                .unwrap_or(StubReply::Transport("no scripted reply".to_string()))
        }
    }
}

impl WebhookClient for StubWebhookClient {
    async fn get(&self, url: &Url) -> Result<WebhookReply> {
        self.requests.lock().unwrap().push(url.clone());
        match self.next_reply() {
            StubReply::Reply(reply) => Ok(reply),
            StubReply::Transport(message) => Err(Error::webhook_transport(message)),
            StubReply::Pending => std::future::pending().await,
        }
    }
}

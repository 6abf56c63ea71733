//! Building, sending and packaging one campaign submission

use chrono::{DateTime, Utc};
use serde_json::Value;
use url::Url;

use campaigner_core::prelude::*;
use campaigner_core::{iso_timestamp, CampaignData, IntegrationPayload};
use campaigner_webhook::{build_webhook_url, interpret_reply, WebhookClient};

use crate::random::{expected_users, RandomSource};

/// Request URL for `campaign`, stamped with `now`
pub fn prepare_request(base: &str, campaign: &CampaignData, now: DateTime<Utc>) -> Result<Url> {
    build_webhook_url(base, campaign, &iso_timestamp(now))
}

/// Issue the GET and turn the reply into a `webhookResponse` value
pub async fn send<C: WebhookClient>(client: &C, url: &Url) -> Result<Value> {
    info!("Calling webhook: {}", url);
    let reply = client.get(url).await?;
    debug!("Webhook replied {} {}", reply.status, reply.reason);
    interpret_reply(reply)
}

/// The payload handed to the review screen after a successful request
pub fn build_payload(
    campaign: CampaignData,
    url: &str,
    response: Value,
    random: &dyn RandomSource,
    now: DateTime<Utc>,
) -> IntegrationPayload {
    IntegrationPayload::new(
        campaign,
        iso_timestamp(now),
        url.to_string(),
        expected_users(random),
        Some(response),
    )
}

/// What a submission would produce, without touching the network
pub fn preview_payload(
    campaign: CampaignData,
    preview_url: &str,
    random: &dyn RandomSource,
    now: DateTime<Utc>,
) -> IntegrationPayload {
    IntegrationPayload::new(
        campaign,
        iso_timestamp(now),
        preview_url.to_string(),
        expected_users(random),
        None,
    )
}

//! Review screen state: the payload of a successful submission plus the
//! cosmetic Mautic summary shown alongside it

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use campaigner_core::{iso_timestamp, IntegrationPayload};

use crate::clipboard::CopyTarget;
use crate::random::RandomSource;
use crate::scroll::ScrollState;

pub const MOCK_CAMPAIGN_ID_MIN: u32 = 100;
pub const MOCK_CAMPAIGN_ID_MAX: u32 = 1099;
pub const MOCK_SEGMENT_ID_MIN: u32 = 200;
pub const MOCK_SEGMENT_ID_MAX: u32 = 1199;

/// Decorative "what Mautic did" figures.
///
/// Not derived from the webhook reply; the IDs and counts are invented when
/// the review screen opens and stay fixed while it is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockWebhookSummary {
    pub status: String,
    pub message: String,
    pub mautic_campaign_id: u32,
    pub mautic_segment_id: u32,
    pub campaign_name: String,
    pub segment_name: String,
    pub processed_at: String,
    pub users_added_to_segment: u32,
    pub roles_targeted: Vec<String>,
    pub geographic_filters: usize,
    pub is_published: bool,
}

impl MockWebhookSummary {
    pub fn generate(
        payload: &IntegrationPayload,
        random: &dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Self {
        let campaign = &payload.campaign;
        Self {
            status: "success".to_string(),
            message: "Mautic campaign and segment created successfully".to_string(),
            mautic_campaign_id: random.between(MOCK_CAMPAIGN_ID_MIN, MOCK_CAMPAIGN_ID_MAX),
            mautic_segment_id: random.between(MOCK_SEGMENT_ID_MIN, MOCK_SEGMENT_ID_MAX),
            campaign_name: campaign.name.clone(),
            segment_name: campaign.segment_name.clone(),
            processed_at: iso_timestamp(now),
            users_added_to_segment: payload.expected_users,
            roles_targeted: campaign.roles.clone(),
            geographic_filters: campaign.filters.active_count(),
            is_published: campaign.mautic_settings.is_published,
        }
    }
}

/// Transient "copied" feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyNotice {
    pub text: String,
    pub ticks_left: u16,
}

/// Reviewing-screen state
#[derive(Debug, Clone)]
pub struct Review {
    pub payload: IntegrationPayload,
    pub summary: MockWebhookSummary,
    pub scroll: ScrollState,
    pub notice: Option<CopyNotice>,
}

impl Review {
    pub fn new(payload: IntegrationPayload, summary: MockWebhookSummary) -> Self {
        Self {
            payload,
            summary,
            scroll: ScrollState::new(),
            notice: None,
        }
    }

    /// Text that `target` copies
    pub fn copy_text(&self, target: CopyTarget) -> serde_json::Result<String> {
        match target {
            CopyTarget::Payload => self.payload.to_pretty_json(),
            CopyTarget::WebhookUrl => Ok(self.payload.webhook_url.clone()),
        }
    }

    pub fn show_notice(&mut self, text: impl Into<String>, ticks: u16) {
        self.notice = Some(CopyNotice {
            text: text.into(),
            ticks_left: ticks,
        });
    }

    /// Count the notice down; clears it when it runs out
    pub fn tick(&mut self) {
        if let Some(notice) = &mut self.notice {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.notice = None;
            }
        }
    }

    /// Payload timestamp as `dd/mm/yyyy HH:MM:SS` in local time; falls back
    /// to the raw string if it does not parse
    pub fn display_timestamp(&self) -> String {
        format_local_timestamp(&self.payload.timestamp)
    }
}

pub fn format_local_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| {
            at.with_timezone(&Local)
                .format("%d/%m/%Y %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

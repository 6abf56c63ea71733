//! Headless mode - NDJSON event output instead of the TUI
//!
//! Fills the form from command-line values, previews or submits it once and
//! prints one JSON object per line on stdout, so scripts can drive campaign
//! creation without a terminal.
//!
//! # Example Output
//!
//! ```json
//! {"event":"submitting","url":"https://.../testemautic?name=Promo&...","timestamp":1714564800000}
//! {"event":"integration_created","payload":{...},"summary":{...},"timestamp":1714564800412}
//! ```

pub mod runner;

use std::io::Write;

use campaigner_app::{EngineEvent, MockWebhookSummary};
use campaigner_core::prelude::*;
use campaigner_core::{FieldEdit, FilterField, IntegrationPayload, SettingsTextField};
use chrono::Utc;
use serde::Serialize;

pub use runner::{run_headless, run_with_engine, HeadlessOutcome};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Required fields were missing; nothing was sent
    ValidationFailed { message: String, timestamp: i64 },

    /// The payload a submission would carry (`--preview`)
    Preview {
        payload: IntegrationPayload,
        timestamp: i64,
    },

    /// The webhook GET was started
    Submitting { url: String, timestamp: i64 },

    /// The webhook answered with a 2xx
    IntegrationCreated {
        payload: IntegrationPayload,
        summary: MockWebhookSummary,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{json}")?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

impl From<EngineEvent> for HeadlessEvent {
    fn from(event: EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::ValidationFailed { message } => {
                Self::ValidationFailed { message, timestamp }
            }
            EngineEvent::PreviewReady { payload } => Self::Preview { payload, timestamp },
            EngineEvent::SubmitStarted { url } => Self::Submitting { url, timestamp },
            EngineEvent::IntegrationCreated { payload, summary } => Self::IntegrationCreated {
                payload,
                summary,
                timestamp,
            },
            EngineEvent::Error { message } => Self::Error {
                message,
                fatal: false,
                timestamp,
            },
        }
    }
}

/// Form values supplied on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignInput {
    pub name: String,
    /// Derived from the name when absent
    pub segment_name: Option<String>,
    pub roles: Vec<String>,
    pub condominio: Option<String>,
    pub cidade: Option<String>,
    pub bairro: Option<String>,
    /// State code, case-insensitive
    pub estado: Option<String>,
    pub campaign_description: Option<String>,
    pub segment_description: Option<String>,
    /// Create campaign and segment unpublished
    pub draft: bool,
}

impl CampaignInput {
    /// The form edits that reproduce this input, in the order a user would
    /// make them: name first, so the segment name auto-fill applies.
    pub fn edits(&self) -> Vec<FieldEdit> {
        let mut edits = vec![FieldEdit::Name(self.name.clone())];

        if let Some(segment_name) = &self.segment_name {
            edits.push(FieldEdit::SegmentName(segment_name.clone()));
        }

        let mut seen: Vec<&str> = Vec::new();
        for role in &self.roles {
            if seen.contains(&role.as_str()) {
                continue;
            }
            if !campaigner_core::is_known_role(role) {
                warn!("Role {:?} is not in the role catalog; sending it anyway", role);
            }
            seen.push(role.as_str());
            edits.push(FieldEdit::ToggleRole(role.clone()));
        }

        let estado = self.estado.as_ref().map(|code| code.trim().to_uppercase());
        for (field, value) in [
            (FilterField::Condominio, self.condominio.as_ref()),
            (FilterField::Cidade, self.cidade.as_ref()),
            (FilterField::Bairro, self.bairro.as_ref()),
            (FilterField::Estado, estado.as_ref()),
        ] {
            if let Some(value) = value {
                edits.push(FieldEdit::Filter(field, value.clone()));
            }
        }

        for (field, value) in [
            (
                SettingsTextField::CampaignDescription,
                self.campaign_description.as_ref(),
            ),
            (
                SettingsTextField::SegmentDescription,
                self.segment_description.as_ref(),
            ),
        ] {
            if let Some(value) = value {
                edits.push(FieldEdit::SettingsText(field, value.clone()));
            }
        }

        if self.draft {
            edits.push(FieldEdit::Published(false));
        }

        edits
    }

    /// Problems worth rejecting before anything runs
    pub fn check(&self) -> std::result::Result<(), String> {
        if let Some(code) = &self.estado {
            let code = code.trim().to_uppercase();
            if !code.is_empty() && campaigner_core::state_name(&code).is_none() {
                return Err(format!("Unknown state code: {code}"));
            }
        }
        Ok(())
    }
}

//! Campaign domain types
//!
//! [`CampaignData`] is edited exclusively through functions that return a new
//! value (`with_*`, [`CampaignData::apply`]); a nested record is replaced as a
//! whole, never patched in place. Keys serialize in camelCase so the JSON the
//! user copies matches what the webhook flow expects.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Action tag carried by every payload
pub const INTEGRATION_ACTION: &str = "create_mautic_campaign_and_segment";

/// Lower bound of the cosmetic "expected users" figure
pub const EXPECTED_USERS_MIN: u32 = 50;

/// Upper bound (inclusive) of the cosmetic "expected users" figure
pub const EXPECTED_USERS_MAX: u32 = 549;

/// Prefix used when the segment name is derived from the campaign name
const SEGMENT_NAME_PREFIX: &str = "Segmento ";

/// Format an instant the way browsers print `Date.toISOString()`:
/// UTC, millisecond precision, `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ─────────────────────────────────────────────────────────────────────────────
// Filters
// ─────────────────────────────────────────────────────────────────────────────

/// Geographic filters narrowing segment membership
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub condominio: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub bairro: String,
    /// State code from the selector, or empty for "all states"
    #[serde(default)]
    pub estado: String,
}

/// Addresses one leaf of [`Filters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Condominio,
    Cidade,
    Bairro,
    Estado,
}

impl FilterField {
    /// Declaration order, also the order filters are displayed and encoded in
    pub const ALL: [FilterField; 4] = [
        FilterField::Condominio,
        FilterField::Cidade,
        FilterField::Bairro,
        FilterField::Estado,
    ];

    /// Wire/JSON key
    pub fn key(self) -> &'static str {
        match self {
            FilterField::Condominio => "condominio",
            FilterField::Cidade => "cidade",
            FilterField::Bairro => "bairro",
            FilterField::Estado => "estado",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Condominio => "Condominium",
            FilterField::Cidade => "City",
            FilterField::Bairro => "Neighborhood",
            FilterField::Estado => "State",
        }
    }
}

impl Filters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Condominio => &self.condominio,
            FilterField::Cidade => &self.cidade,
            FilterField::Bairro => &self.bairro,
            FilterField::Estado => &self.estado,
        }
    }

    /// Return a copy with one filter replaced
    pub fn with(&self, field: FilterField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            FilterField::Condominio => Self {
                condominio: value,
                ..self.clone()
            },
            FilterField::Cidade => Self {
                cidade: value,
                ..self.clone()
            },
            FilterField::Bairro => Self {
                bairro: value,
                ..self.clone()
            },
            FilterField::Estado => Self {
                estado: value,
                ..self.clone()
            },
        }
    }

    /// Non-blank filters with their labels, in declaration order
    pub fn active(&self) -> Vec<(FilterField, &str)> {
        FilterField::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .filter(|(_, value)| !value.trim().is_empty())
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.active().len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mautic settings
// ─────────────────────────────────────────────────────────────────────────────

/// Descriptions and publish flag applied to both campaign and segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MauticSettings {
    #[serde(default)]
    pub campaign_description: String,
    #[serde(default)]
    pub segment_description: String,
    #[serde(default = "default_published")]
    pub is_published: bool,
}

fn default_published() -> bool {
    true
}

impl Default for MauticSettings {
    fn default() -> Self {
        Self {
            campaign_description: String::new(),
            segment_description: String::new(),
            is_published: default_published(),
        }
    }
}

/// Addresses one free-text leaf of [`MauticSettings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsTextField {
    CampaignDescription,
    SegmentDescription,
}

impl SettingsTextField {
    pub fn key(self) -> &'static str {
        match self {
            SettingsTextField::CampaignDescription => "campaignDescription",
            SettingsTextField::SegmentDescription => "segmentDescription",
        }
    }
}

impl MauticSettings {
    pub fn get(&self, field: SettingsTextField) -> &str {
        match field {
            SettingsTextField::CampaignDescription => &self.campaign_description,
            SettingsTextField::SegmentDescription => &self.segment_description,
        }
    }

    pub fn with_text(&self, field: SettingsTextField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            SettingsTextField::CampaignDescription => Self {
                campaign_description: value,
                ..self.clone()
            },
            SettingsTextField::SegmentDescription => Self {
                segment_description: value,
                ..self.clone()
            },
        }
    }

    pub fn with_published(&self, is_published: bool) -> Self {
        Self {
            is_published,
            ..self.clone()
        }
    }

    /// "Published" or "Draft"
    pub fn status_label(&self) -> &'static str {
        if self.is_published {
            "Published"
        } else {
            "Draft"
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

/// A field that must be filled before preview or submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    SegmentName,
    Roles,
}

/// What the user was doing when validation refused the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationAttempt {
    Submit,
    Preview,
}

const MISSING_FIELDS_SUBMIT: &str =
    "Please fill in the campaign name and segment name, and select at least one role.";
const MISSING_FIELDS_PREVIEW: &str =
    "Please fill in the campaign name and segment name, and select at least one role before previewing.";

/// Returned when the required fields are not all present
///
/// The message is the same whatever is missing: the form shows one alert
/// listing every requirement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", MISSING_FIELDS_SUBMIT)]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

impl ValidationError {
    /// Alert text for a refused submit or preview
    pub fn message(&self, attempt: ValidationAttempt) -> &'static str {
        match attempt {
            ValidationAttempt::Submit => MISSING_FIELDS_SUBMIT,
            ValidationAttempt::Preview => MISSING_FIELDS_PREVIEW,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Campaign data
// ─────────────────────────────────────────────────────────────────────────────

/// One edit of a single form leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    SegmentName(String),
    Filter(FilterField, String),
    SettingsText(SettingsTextField, String),
    Published(bool),
    ToggleRole(String),
}

/// Everything the form collects for one campaign + segment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignData {
    pub name: String,
    pub segment_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub filters: Filters,
    #[serde(default)]
    pub mautic_settings: MauticSettings,
}

impl CampaignData {
    /// Set the campaign name.
    ///
    /// While the segment name is still empty it is derived as
    /// `"Segmento <name>"`; once it holds anything it is never overwritten.
    pub fn with_name(&self, value: impl Into<String>) -> Self {
        let name = value.into();
        let segment_name = if self.segment_name.is_empty() {
            format!("{SEGMENT_NAME_PREFIX}{name}")
        } else {
            self.segment_name.clone()
        };
        Self {
            name,
            segment_name,
            ..self.clone()
        }
    }

    pub fn with_segment_name(&self, value: impl Into<String>) -> Self {
        Self {
            segment_name: value.into(),
            ..self.clone()
        }
    }

    pub fn with_filter(&self, field: FilterField, value: impl Into<String>) -> Self {
        Self {
            filters: self.filters.with(field, value),
            ..self.clone()
        }
    }

    pub fn with_settings_text(&self, field: SettingsTextField, value: impl Into<String>) -> Self {
        Self {
            mautic_settings: self.mautic_settings.with_text(field, value),
            ..self.clone()
        }
    }

    pub fn with_published(&self, is_published: bool) -> Self {
        Self {
            mautic_settings: self.mautic_settings.with_published(is_published),
            ..self.clone()
        }
    }

    /// Add `role` if absent, remove it if present. New roles are appended.
    pub fn with_role_toggled(&self, role: &str) -> Self {
        let roles = if self.has_role(role) {
            self.roles.iter().filter(|r| *r != role).cloned().collect()
        } else {
            let mut roles = self.roles.clone();
            roles.push(role.to_string());
            roles
        };
        Self {
            roles,
            ..self.clone()
        }
    }

    /// Apply a single-leaf edit
    pub fn apply(&self, edit: &FieldEdit) -> Self {
        match edit {
            FieldEdit::Name(value) => self.with_name(value.as_str()),
            FieldEdit::SegmentName(value) => self.with_segment_name(value.as_str()),
            FieldEdit::Filter(field, value) => self.with_filter(*field, value.as_str()),
            FieldEdit::SettingsText(field, value) => self.with_settings_text(*field, value.as_str()),
            FieldEdit::Published(value) => self.with_published(*value),
            FieldEdit::ToggleRole(role) => self.with_role_toggled(role),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check the fields preview and submit require
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.segment_name.trim().is_empty() {
            missing.push(RequiredField::SegmentName);
        }
        if self.roles.is_empty() {
            missing.push(RequiredField::Roles);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Integration payload
// ─────────────────────────────────────────────────────────────────────────────

/// Snapshot produced by one successful submission (or by a preview, in which
/// case `webhook_response` is `None` and the URL is a placeholder)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationPayload {
    pub campaign: CampaignData,
    pub timestamp: String,
    pub webhook_url: String,
    pub action: String,
    #[serde(rename = "expectedUsers")]
    pub expected_users: u32,
    /// Absent for previews. A webhook that answered JSON `null` is
    /// `Some(Value::Null)`, distinct from absent.
    #[serde(
        rename = "webhookResponse",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    pub webhook_response: Option<serde_json::Value>,
}

/// Any value that is present, `null` included, becomes `Some`; a missing key
/// falls back to `None` through `#[serde(default)]`
fn present_value<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl IntegrationPayload {
    pub fn new(
        campaign: CampaignData,
        timestamp: String,
        webhook_url: String,
        expected_users: u32,
        webhook_response: Option<serde_json::Value>,
    ) -> Self {
        Self {
            campaign,
            timestamp,
            webhook_url,
            action: INTEGRATION_ACTION.to_string(),
            expected_users,
            webhook_response,
        }
    }

    /// Pretty JSON, as copied to the clipboard
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! # campaigner-core - Core Domain Types
//!
//! Foundation crate for Mautic Campaigner. Provides the campaign data model,
//! the static catalogs the form offers, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`CampaignData`] - Everything the form collects for one campaign + segment
//! - [`Filters`], [`FilterField`] - Geographic filters narrowing the segment
//! - [`MauticSettings`], [`SettingsTextField`] - Descriptions and publish flag
//! - [`FieldEdit`] - A single-leaf edit, applied immutably
//! - [`IntegrationPayload`] - Snapshot produced by a successful submission
//! - [`ValidationError`], [`RequiredField`] - Why a submit/preview was refused
//!
//! ### Catalogs (`catalog`)
//! - [`AVAILABLE_ROLES`] - Fixed list of target roles
//! - [`BRAZILIAN_STATES`] - Federative units offered by the state selector
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use campaigner_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use catalog::{
    is_known_role, state_name, BrazilianState, AVAILABLE_ROLES, BRAZILIAN_STATES,
};
pub use error::{Error, Result, ResultExt};
pub use types::{
    iso_timestamp, CampaignData, FieldEdit, FilterField, Filters, IntegrationPayload,
    MauticSettings, RequiredField, SettingsTextField, ValidationAttempt, ValidationError,
    EXPECTED_USERS_MAX, EXPECTED_USERS_MIN, INTEGRATION_ACTION,
};

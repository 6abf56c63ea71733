//! Mautic Campaigner Library
//!
//! Terminal form that creates a Mautic campaign and segment through one n8n
//! webhook call. The interactive UI lives in `campaigner-tui`; this crate adds
//! the headless NDJSON mode used by scripts.

pub mod headless;

// Re-export main entry points
pub use campaigner_tui::run;
pub use headless::{run_headless, CampaignInput, HeadlessEvent, HeadlessOutcome};

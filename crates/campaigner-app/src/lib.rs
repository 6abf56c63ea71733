//! campaigner-app - Application state and orchestration for Mautic Campaigner
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the campaign form, the review screen that follows a
//! successful submission, configuration loading, and the [`Engine`] that
//! front ends (TUI, headless) drive.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod engine;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod random;
pub mod review;
pub mod scroll;
pub mod signals;
pub mod state;
pub mod submission;

// Re-export primary types
pub use clipboard::{Clipboard, CopyTarget, MemoryClipboard};
pub use engine::{Engine, EngineEvent};
pub use form::{CampaignForm, FormField, PreviewState};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use random::{FixedRandom, RandomSource, SharedRandom, ThreadRandom};
pub use review::{MockWebhookSummary, Review};
pub use scroll::ScrollState;
pub use state::{Alert, AlertKind, AppState, Screen};

//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each screen
//! - `form`: Editing, preview and submit handlers
//! - `review`: Review screen handlers (copy, new integration)
//! - `scroll`: Scroll handlers for the review screen and preview modal

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod review;
pub(crate) mod scroll;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use url::Url;

use crate::clipboard::CopyTarget;
use crate::message::Message;
use campaigner_core::CampaignData;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Send the campaign to the webhook on a background task.
    ///
    /// The task reports back with exactly one `Message::SubmitCompleted`.
    SubmitCampaign {
        /// Snapshot of the committed form data
        campaign: CampaignData,
        /// Fully built request URL (base + query)
        url: Url,
    },

    /// Write `text` to the clipboard, then report `Copied`/`CopyFailed`
    CopyToClipboard { text: String, target: CopyTarget },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

//! Message types for the application (TEA pattern)

use campaigner_core::{CampaignData, FieldEdit};

use crate::clipboard::CopyTarget;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (copy notice countdown)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler, Esc/q where allowed)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Editing
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next form field
    FocusNext,

    /// Move focus to the previous form field
    FocusPrevious,

    /// Append a character to the focused text field
    InputChar(char),

    /// Delete the last character of the focused text field
    DeleteChar,

    /// Clear the focused text field
    ClearField,

    /// Apply a single-leaf edit directly (headless mode, tests)
    Edit(FieldEdit),

    /// Flip "Publish immediately"
    TogglePublished,

    /// Move the role cursor up (leaves the list at the top)
    RoleCursorUp,

    /// Move the role cursor down (leaves the list at the bottom)
    RoleCursorDown,

    /// Add or remove the role under the cursor
    ToggleRoleAtCursor,

    /// Cycle the state selector
    CycleEstado { forward: bool },

    /// Activate whatever has focus (buttons, toggles)
    ActivateFocused,

    // ─────────────────────────────────────────────────────────
    // Preview & Submit
    // ─────────────────────────────────────────────────────────
    /// Validate and open the JSON preview
    Preview,

    /// Close the JSON preview
    ClosePreview,

    /// Validate and send the campaign to the webhook
    Submit,

    /// The webhook request finished (exactly one per `Submit` that passed
    /// validation)
    SubmitCompleted {
        /// Snapshot of the form data that was sent
        campaign: CampaignData,
        /// The exact URL requested
        url: String,
        /// Parsed `webhookResponse`, or a displayable error
        outcome: Result<serde_json::Value, String>,
    },

    /// Hide the current alert
    DismissAlert,

    // ─────────────────────────────────────────────────────────
    // Review Screen
    // ─────────────────────────────────────────────────────────
    /// Drop the payload and show a fresh form
    NewIntegration,

    /// Copy the payload JSON to the clipboard
    CopyPayload,

    /// Copy the invoked webhook URL to the clipboard
    CopyUrl,

    /// A clipboard write succeeded
    Copied { target: CopyTarget },

    /// A clipboard write failed
    CopyFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Scroll Messages (review screen and preview modal)
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
}

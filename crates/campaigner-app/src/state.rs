//! Application state (Model in TEA pattern)

use std::sync::Arc;

use crate::config::Settings;
use crate::form::CampaignForm;
use crate::random::{SharedRandom, ThreadRandom};
use crate::review::Review;

/// Which screen the root controller shows. Exactly one payload exists at a
/// time: the one inside `Reviewing`.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Filling in the campaign form
    Editing(CampaignForm),
    /// Showing the result of a successful submission
    Reviewing(Box<Review>),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Editing(CampaignForm::default())
    }
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Missing required fields
    Validation,
    /// Webhook or clipboard failure
    Error,
}

/// Modal message shown over the current screen until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Validation,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub alert: Option<Alert>,
    pub settings: Settings,
    pub random: SharedRandom,
    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            screen: Screen::default(),
            alert: None,
            settings,
            random: Arc::new(ThreadRandom),
            quitting: false,
        }
    }

    /// Replace the random source (tests pin it with `FixedRandom`)
    pub fn with_random(mut self, random: SharedRandom) -> Self {
        self.random = random;
        self
    }

    pub fn form(&self) -> Option<&CampaignForm> {
        match &self.screen {
            Screen::Editing(form) => Some(form),
            Screen::Reviewing(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut CampaignForm> {
        match &mut self.screen {
            Screen::Editing(form) => Some(form),
            Screen::Reviewing(_) => None,
        }
    }

    pub fn review(&self) -> Option<&Review> {
        match &self.screen {
            Screen::Reviewing(review) => Some(review),
            Screen::Editing(_) => None,
        }
    }

    pub fn review_mut(&mut self) -> Option<&mut Review> {
        match &mut self.screen {
            Screen::Reviewing(review) => Some(review),
            Screen::Editing(_) => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.form().is_some_and(|form| form.submitting)
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

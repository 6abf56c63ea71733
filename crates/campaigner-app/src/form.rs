//! Campaign form state
//!
//! The form owns the [`CampaignData`] being edited plus the keyboard-only
//! bits around it: which field has focus, the text being typed into it, the
//! role cursor and the in-flight/preview flags.
//!
//! Typing goes into `draft`; the draft is committed to `data` through the
//! matching [`FieldEdit`] when focus leaves the field or before preview and
//! submit. Committing whole values keeps the segment-name auto-fill
//! (`"Segmento <name>"`) a one-shot derived from the finished name.

use crate::scroll::ScrollState;
use campaigner_core::{
    CampaignData, FieldEdit, FilterField, IntegrationPayload, SettingsTextField, AVAILABLE_ROLES,
    BRAZILIAN_STATES,
};

/// Focusable form elements, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Name,
    SegmentName,
    CampaignDescription,
    SegmentDescription,
    Published,
    Roles,
    Condominio,
    Cidade,
    Bairro,
    Estado,
    PreviewButton,
    SubmitButton,
}

impl FormField {
    pub const ALL: [FormField; 12] = [
        FormField::Name,
        FormField::SegmentName,
        FormField::CampaignDescription,
        FormField::SegmentDescription,
        FormField::Published,
        FormField::Roles,
        FormField::Condominio,
        FormField::Cidade,
        FormField::Bairro,
        FormField::Estado,
        FormField::PreviewButton,
        FormField::SubmitButton,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Campaign name",
            FormField::SegmentName => "Segment name",
            FormField::CampaignDescription => "Campaign description",
            FormField::SegmentDescription => "Segment description",
            FormField::Published => "Publish immediately",
            FormField::Roles => "Target roles",
            FormField::Condominio => FilterField::Condominio.label(),
            FormField::Cidade => FilterField::Cidade.label(),
            FormField::Bairro => FilterField::Bairro.label(),
            FormField::Estado => FilterField::Estado.label(),
            FormField::PreviewButton => "Preview JSON",
            FormField::SubmitButton => "Create in Mautic",
        }
    }

    /// Whether the field takes typed text
    pub fn is_text(self) -> bool {
        self.text_value(&CampaignData::default()).is_some()
    }

    /// Committed value of a text field, `None` for non-text fields
    pub fn text_value(self, data: &CampaignData) -> Option<&str> {
        match self {
            FormField::Name => Some(&data.name),
            FormField::SegmentName => Some(&data.segment_name),
            FormField::CampaignDescription => Some(
                data.mautic_settings
                    .get(SettingsTextField::CampaignDescription),
            ),
            FormField::SegmentDescription => Some(
                data.mautic_settings
                    .get(SettingsTextField::SegmentDescription),
            ),
            FormField::Condominio => Some(data.filters.get(FilterField::Condominio)),
            FormField::Cidade => Some(data.filters.get(FilterField::Cidade)),
            FormField::Bairro => Some(data.filters.get(FilterField::Bairro)),
            _ => None,
        }
    }

    /// The edit that stores `value` into this field, `None` for non-text
    /// fields
    pub fn text_edit(self, value: String) -> Option<FieldEdit> {
        match self {
            FormField::Name => Some(FieldEdit::Name(value)),
            FormField::SegmentName => Some(FieldEdit::SegmentName(value)),
            FormField::CampaignDescription => Some(FieldEdit::SettingsText(
                SettingsTextField::CampaignDescription,
                value,
            )),
            FormField::SegmentDescription => Some(FieldEdit::SettingsText(
                SettingsTextField::SegmentDescription,
                value,
            )),
            FormField::Condominio => Some(FieldEdit::Filter(FilterField::Condominio, value)),
            FormField::Cidade => Some(FieldEdit::Filter(FilterField::Cidade, value)),
            FormField::Bairro => Some(FieldEdit::Filter(FilterField::Bairro, value)),
            _ => None,
        }
    }
}

/// Read-only JSON preview opened over the form
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewState {
    pub payload: IntegrationPayload,
    pub scroll: ScrollState,
}

/// Editing-screen state
#[derive(Debug, Clone, Default)]
pub struct CampaignForm {
    /// Committed form values
    pub data: CampaignData,
    pub focus: FormField,
    /// Uncommitted text of the focused text field
    pub draft: String,
    /// Index into [`AVAILABLE_ROLES`]
    pub role_cursor: usize,
    /// A webhook request is in flight; submit is disabled
    pub submitting: bool,
    /// URL of the request in flight
    pub request_url: Option<String>,
    pub preview: Option<PreviewState>,
}

impl CampaignForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to display for `field`: the draft when it has focus
    pub fn display_text(&self, field: FormField) -> &str {
        if field == self.focus && field.is_text() {
            &self.draft
        } else {
            field.text_value(&self.data).unwrap_or_default()
        }
    }

    /// Store the draft into `data` if it differs from the committed value
    pub fn commit_draft(&mut self) {
        let Some(current) = self.focus.text_value(&self.data) else {
            return;
        };
        if current == self.draft {
            return;
        }
        if let Some(edit) = self.focus.text_edit(self.draft.clone()) {
            self.data = self.data.apply(&edit);
        }
    }

    /// Commit the draft and return the data as it stands
    pub fn committed_data(&mut self) -> CampaignData {
        self.commit_draft();
        self.data.clone()
    }

    fn load_draft(&mut self) {
        self.draft = self
            .focus
            .text_value(&self.data)
            .unwrap_or_default()
            .to_string();
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.commit_draft();
        self.focus = field;
        self.load_draft();
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.set_focus(self.focus.previous());
    }

    pub fn input_char(&mut self, c: char) {
        if self.focus.is_text() {
            self.draft.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if self.focus.is_text() {
            self.draft.pop();
        }
    }

    pub fn clear_field(&mut self) {
        if self.focus.is_text() {
            self.draft.clear();
        }
    }

    /// Apply an edit to `data`, keeping the draft in sync
    pub fn apply_edit(&mut self, edit: &FieldEdit) {
        self.commit_draft();
        self.data = self.data.apply(edit);
        self.load_draft();
    }

    pub fn toggle_published(&mut self) {
        self.data = self
            .data
            .with_published(!self.data.mautic_settings.is_published);
    }

    /// Role under the cursor
    pub fn cursor_role(&self) -> Option<&'static str> {
        AVAILABLE_ROLES.get(self.role_cursor).copied()
    }

    pub fn toggle_role_at_cursor(&mut self) {
        if let Some(role) = self.cursor_role() {
            self.data = self.data.with_role_toggled(role);
        }
    }

    /// Move the role cursor up; at the top, focus moves to the previous field
    pub fn role_cursor_up(&mut self) {
        if self.role_cursor == 0 {
            self.focus_previous();
        } else {
            self.role_cursor -= 1;
        }
    }

    /// Move the role cursor down; at the bottom, focus moves to the next field
    pub fn role_cursor_down(&mut self) {
        if self.role_cursor + 1 >= AVAILABLE_ROLES.len() {
            self.focus_next();
        } else {
            self.role_cursor += 1;
        }
    }

    /// Step the state selector through "All states" and every state code
    pub fn cycle_estado(&mut self, forward: bool) {
        // Position 0 is "All states" (empty value)
        let slots = BRAZILIAN_STATES.len() + 1;
        let current = self.data.filters.get(FilterField::Estado);
        let position = BRAZILIAN_STATES
            .iter()
            .position(|state| state.code == current)
            .map(|i| i + 1)
            .unwrap_or(0);

        let next = if forward {
            (position + 1) % slots
        } else {
            (position + slots - 1) % slots
        };

        let value = match next {
            0 => String::new(),
            n => BRAZILIAN_STATES[n - 1].code.to_string(),
        };
        self.data = self.data.with_filter(FilterField::Estado, value);
    }

    pub fn open_preview(&mut self, payload: IntegrationPayload) {
        self.preview = Some(PreviewState {
            payload,
            scroll: ScrollState::new(),
        });
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    /// Label of the submit control for the current state
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Creating in Mautic..."
        } else {
            FormField::SubmitButton.label()
        }
    }
}

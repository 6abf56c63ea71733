//! Campaign form widget
//!
//! Lays the form out as one column of lines inside a glass block and
//! scrolls so the focused element stays visible.

use campaigner_app::{CampaignForm, FormField};
use campaigner_core::{state_name, FilterField, AVAILABLE_ROLES};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Width of the label column
const LABEL_WIDTH: usize = 22;

const ROLES_HINT: &str = "Select at least one role to create the segment";

pub struct CampaignFormView<'a> {
    form: &'a CampaignForm,
}

impl<'a> CampaignFormView<'a> {
    pub fn new(form: &'a CampaignForm) -> Self {
        Self { form }
    }

    /// Form lines plus the index of the line holding the focused element
    fn build_lines(&self) -> (Vec<Line<'a>>, usize) {
        let form = self.form;
        let mut lines = Vec::new();
        let mut focus_line = 0;

        lines.push(section_title("Campaign & segment", None));
        for field in [
            FormField::Name,
            FormField::SegmentName,
            FormField::CampaignDescription,
            FormField::SegmentDescription,
        ] {
            if field == form.focus {
                focus_line = lines.len();
            }
            lines.push(self.text_line(field));
        }

        if form.focus == FormField::Published {
            focus_line = lines.len();
        }
        lines.push(self.published_line());
        lines.push(Line::default());

        let selected = form.data.roles.len();
        lines.push(section_title(
            FormField::Roles.label(),
            Some(format!("{selected} selected")),
        ));
        for (index, role) in AVAILABLE_ROLES.iter().enumerate() {
            let at_cursor = form.focus == FormField::Roles && form.role_cursor == index;
            if at_cursor {
                focus_line = lines.len();
            }
            lines.push(role_line(role, form.data.has_role(role), at_cursor));
        }
        if selected == 0 {
            lines.push(Line::from(Span::styled(
                format!("  {ROLES_HINT}"),
                styles::status_yellow(),
            )));
        }
        lines.push(Line::default());

        let active = form.data.filters.active_count();
        let badge = (active > 0).then(|| format!("{active} active filters"));
        lines.push(section_title("Geographic filters", badge));
        for field in [FormField::Condominio, FormField::Cidade, FormField::Bairro] {
            if field == form.focus {
                focus_line = lines.len();
            }
            lines.push(self.text_line(field));
        }
        if form.focus == FormField::Estado {
            focus_line = lines.len();
        }
        lines.push(self.estado_line());
        lines.push(Line::default());

        if matches!(
            form.focus,
            FormField::PreviewButton | FormField::SubmitButton
        ) {
            focus_line = lines.len();
        }
        lines.push(self.buttons_line());

        if form.submitting {
            if let Some(url) = &form.request_url {
                lines.push(Line::from(vec![
                    Span::styled("  GET ", styles::status_yellow()),
                    Span::styled(url.clone(), styles::text_muted()),
                ]));
            }
        }

        (lines, focus_line)
    }

    fn label_span(&self, field: FormField) -> Span<'a> {
        let focused = self.form.focus == field;
        let required = matches!(field, FormField::Name | FormField::SegmentName);
        let text = if required {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        Span::styled(format!("{marker}{text:<LABEL_WIDTH$}"), style)
    }

    fn text_line(&self, field: FormField) -> Line<'a> {
        let value = self.form.display_text(field).to_string();
        let mut spans = vec![self.label_span(field)];
        if self.form.focus == field {
            spans.push(Span::styled(value, styles::text_primary()));
            spans.push(Span::styled("▏", styles::accent()));
        } else if value.is_empty() {
            spans.push(Span::styled("not set", styles::text_muted()));
        } else {
            spans.push(Span::styled(value, styles::text_primary()));
        }
        Line::from(spans)
    }

    fn published_line(&self) -> Line<'a> {
        let settings = &self.form.data.mautic_settings;
        let checkbox = if settings.is_published { "[x]" } else { "[ ]" };
        Line::from(vec![
            self.label_span(FormField::Published),
            Span::styled(
                format!("{checkbox} {}", settings.status_label()),
                styles::text_primary(),
            ),
        ])
    }

    fn estado_line(&self) -> Line<'a> {
        let code = self.form.data.filters.get(FilterField::Estado);
        let value = match state_name(code) {
            Some(name) => format!("{code} - {name}"),
            None => "All states".to_string(),
        };
        let style = if code.is_empty() {
            styles::text_muted()
        } else {
            styles::text_primary()
        };
        let mut spans = vec![self.label_span(FormField::Estado)];
        if self.form.focus == FormField::Estado {
            spans.push(Span::styled("< ", styles::accent()));
            spans.push(Span::styled(value, style));
            spans.push(Span::styled(" >", styles::accent()));
        } else {
            spans.push(Span::styled(value, style));
        }
        Line::from(spans)
    }

    fn buttons_line(&self) -> Line<'a> {
        let button = |field: FormField, label: &str| {
            let style = if self.form.focus == field {
                styles::focused_selected()
            } else {
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            };
            Span::styled(format!("[ {label} ]"), style)
        };

        Line::from(vec![
            Span::raw("  "),
            button(FormField::PreviewButton, FormField::PreviewButton.label()),
            Span::raw("  "),
            button(FormField::SubmitButton, self.form.submit_label()),
        ])
    }
}

fn section_title<'a>(title: &str, badge: Option<String>) -> Line<'a> {
    let mut spans = vec![Span::styled(format!(" {title}"), styles::accent_bold())];
    if let Some(badge) = badge {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("({badge})"), styles::text_muted()));
    }
    Line::from(spans)
}

fn role_line<'a>(role: &'a str, checked: bool, at_cursor: bool) -> Line<'a> {
    let checkbox = if checked { "[x] " } else { "[ ] " };
    let style = if at_cursor {
        styles::focused_selected()
    } else if checked {
        styles::text_primary()
    } else {
        styles::text_secondary()
    };
    Line::from(vec![
        Span::raw(if at_cursor { "  > " } else { "    " }),
        Span::styled(format!("{checkbox}{role}"), style),
    ])
}

/// Offset that keeps `focus_line` inside a window of `visible` lines
fn scroll_for_focus(focus_line: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    (focus_line + 1).saturating_sub(visible)
}

impl Widget for CampaignFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block =
            styles::glass_block(true).title(Span::styled(" New campaign ", styles::accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (lines, focus_line) = self.build_lines();
        let offset = scroll_for_focus(focus_line, inner.height as usize);
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        Paragraph::new(lines).scroll((offset, 0)).render(inner, buf);
    }
}

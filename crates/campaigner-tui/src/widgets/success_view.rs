//! Integration success view
//!
//! Everything the user needs after a successful submission: what Mautic
//! reportedly created, the webhook reply, the URL that was called and the
//! campaign as submitted.

use campaigner_app::{Review, ScrollState};
use campaigner_core::FilterField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

const KEY_WIDTH: usize = 20;

pub struct SuccessView<'a> {
    review: &'a Review,
}

impl<'a> SuccessView<'a> {
    pub fn new(review: &'a Review) -> Self {
        Self { review }
    }

    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let payload = &self.review.payload;
        let summary = &self.review.summary;
        let campaign = &payload.campaign;
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled(" ✓ ", styles::status_green()),
            Span::styled("Integration created", styles::accent_bold()),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "   Campaign \"{}\" and segment \"{}\" were sent to Mautic.",
                campaign.name, campaign.segment_name
            ),
            styles::text_secondary(),
        )));
        lines.push(Line::default());

        section(&mut lines, "Mautic integration");
        let status = campaign.mautic_settings.status_label();
        for (key, value) in [
            (
                "Campaign",
                format!("{} (ID {})", summary.campaign_name, summary.mautic_campaign_id),
            ),
            (
                "Segment",
                format!("{} (ID {})", summary.segment_name, summary.mautic_segment_id),
            ),
            ("Users added", summary.users_added_to_segment.to_string()),
            ("Status", status.to_string()),
            ("Created at", self.review.display_timestamp()),
        ] {
            lines.push(key_value(key, value));
        }
        lines.push(Line::from(Span::styled(
            format!("  {}", summary.message),
            styles::status_green(),
        )));
        lines.push(Line::default());

        if let Some(response) = &payload.webhook_response {
            section(&mut lines, "Webhook response");
            let pretty =
                serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string());
            for line in pretty.lines() {
                lines.push(Line::from(Span::styled(
                    format!("  {line}"),
                    styles::text_primary(),
                )));
            }
            lines.push(Line::default());
        }

        section(&mut lines, "Webhook URL");
        for chunk in wrap_by_width(&payload.webhook_url, width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(
                format!("  {chunk}"),
                styles::text_muted(),
            )));
        }
        lines.push(Line::default());

        section(&mut lines, "Target roles");
        for role in &campaign.roles {
            lines.push(Line::from(Span::styled(
                format!("  • {role}"),
                styles::text_primary(),
            )));
        }
        lines.push(Line::default());

        let filters = campaign.filters.active();
        if !filters.is_empty() {
            section(&mut lines, "Applied filters");
            for (field, value) in filters {
                let value = match field {
                    FilterField::Estado => campaigner_core::state_name(value)
                        .map(|name| format!("{value} - {name}"))
                        .unwrap_or_else(|| value.to_string()),
                    _ => value.to_string(),
                };
                lines.push(key_value(field.label(), value));
            }
            lines.push(Line::default());
        }

        section(&mut lines, "Applied settings");
        let settings = &campaign.mautic_settings;
        if !settings.campaign_description.is_empty() {
            lines.push(key_value(
                "Campaign description",
                settings.campaign_description.clone(),
            ));
        }
        if !settings.segment_description.is_empty() {
            lines.push(key_value(
                "Segment description",
                settings.segment_description.clone(),
            ));
        }
        lines.push(key_value("Publish status", status.to_string()));

        lines
    }
}

fn section(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::from(Span::styled(
        format!(" {title}"),
        styles::accent_bold(),
    )));
}

fn key_value(key: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<KEY_WIDTH$}"), styles::text_secondary()),
        Span::styled(value, styles::text_primary()),
    ])
}

/// Split `text` into chunks no wider than `width` display columns
fn wrap_by_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

impl StatefulWidget for SuccessView<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut ScrollState) {
        let block = styles::glass_block(true).title(Span::styled(
            " Integration created ",
            styles::status_green(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = self.build_lines(inner.width as usize);
        scroll.update_content_size(lines.len(), inner.height as usize);
        Paragraph::new(lines)
            .scroll((scroll.offset_u16(), 0))
            .render(inner, buf);
    }
}

//! JSON preview modal

use campaigner_app::ScrollState;
use campaigner_core::IntegrationPayload;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

/// Read-only pretty JSON of the payload that would be sent, drawn over a
/// dimmed form
pub struct PreviewModal<'a> {
    payload: &'a IntegrationPayload,
}

impl<'a> PreviewModal<'a> {
    pub fn new(payload: &'a IntegrationPayload) -> Self {
        Self { payload }
    }

    fn json_lines(&self) -> Vec<Line<'static>> {
        match self.payload.to_pretty_json() {
            Ok(json) => json
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), styles::text_primary())))
                .collect(),
            Err(e) => vec![Line::from(Span::styled(
                format!("Could not serialize payload: {e}"),
                styles::text_muted(),
            ))],
        }
    }
}

impl StatefulWidget for PreviewModal<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut ScrollState) {
        let modal = modal_overlay::centered_rect_percent(80, 80, area);
        modal_overlay::prepare_modal(buf, area, modal);

        let block = styles::modal_block(" JSON preview ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let [content, hint] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let lines = self.json_lines();
        scroll.update_content_size(lines.len(), content.height as usize);
        Paragraph::new(lines)
            .scroll((scroll.offset_u16(), 0))
            .render(content, buf);

        Line::from(vec![
            Span::styled(" Esc", styles::keybinding()),
            Span::styled(" close  ", styles::text_muted()),
            Span::styled("↑↓ PgUp PgDn", styles::keybinding()),
            Span::styled(" scroll  ", styles::text_muted()),
            Span::styled("Ctrl+S", styles::keybinding()),
            Span::styled(" create", styles::text_muted()),
        ])
        .render(hint, buf);
    }
}

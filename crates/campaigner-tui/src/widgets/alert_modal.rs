//! Alert modal (validation, webhook and clipboard failures)

use campaigner_app::Alert;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::modal_overlay;
use crate::theme::{palette, styles};

const MAX_WIDTH: u16 = 60;

pub struct AlertModal<'a> {
    alert: &'a Alert,
}

impl<'a> AlertModal<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }

    /// Rows the wrapped message needs at `text_width` columns
    fn message_rows(&self, text_width: u16) -> u16 {
        let width = self.alert.message.width().max(1);
        let text_width = usize::from(text_width.max(1));
        u16::try_from(width.div_ceil(text_width)).unwrap_or(u16::MAX)
    }
}

impl Widget for AlertModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, accent) = styles::alert_appearance(self.alert.kind);

        let width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(20);
        // Borders (2) + padding (2) on each axis
        let text_width = width.saturating_sub(4);
        let height = self.message_rows(text_width).saturating_add(6);
        let modal = modal_overlay::centered_rect(width, height, area);
        modal_overlay::prepare_modal(buf, area, modal);

        let block = Block::default()
            .title(Span::styled(title, accent))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(accent)
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height < 2 {
            return;
        }

        let [_, message, _, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let message = Rect {
            x: message.x + 1,
            width: message.width.saturating_sub(2),
            ..message
        };
        Paragraph::new(self.alert.message.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .render(message, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" to dismiss", styles::text_muted()),
        ]))
        .alignment(Alignment::Center)
        .render(hint, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_validation_alert_renders_title_and_message() {
        let alert = Alert::validation("Please fill in the campaign name");
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(AlertModal::new(&alert), area);

        assert!(term.buffer_contains("Missing information"));
        assert!(term.buffer_contains("Please fill in the campaign name"));
        assert!(term.buffer_contains("Enter to dismiss"));
    }

    #[test]
    fn test_error_alert_wraps_long_message() {
        let alert = Alert::error(
            "Webhook request failed: 500 Internal Server Error. The integration was not created.",
        );
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(AlertModal::new(&alert), area);

        assert!(term.buffer_contains("Error"));
        assert!(term.buffer_contains("Webhook request failed: 500"));
        assert!(term.buffer_contains("not created."));
    }

    #[test]
    fn test_alert_in_compact_terminal() {
        let alert = Alert::error("Hello");
        let mut term = TestTerminal::compact();
        let area = term.area();
        term.render_widget(AlertModal::new(&alert), area);
        assert!(term.buffer_contains("Hello"));
    }

    #[test]
    fn test_message_rows() {
        let alert = Alert::error("a".repeat(100));
        let modal = AlertModal::new(&alert);
        assert_eq!(modal.message_rows(50), 2);
        assert_eq!(modal.message_rows(40), 3);
    }
}

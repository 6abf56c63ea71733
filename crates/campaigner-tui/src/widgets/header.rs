//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Title bar: app name plus the name of the current screen
pub struct MainHeader<'a> {
    subtitle: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(subtitle: &'a str) -> Self {
        Self { subtitle }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled("Mautic Campaigner", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.subtitle, styles::text_secondary()),
        ]);
        line.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_subtitle() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new("New campaign"), Rect::new(0, 0, 80, 3));
        assert!(term.buffer_contains("Mautic Campaigner"));
        assert!(term.buffer_contains("New campaign"));
    }

    #[test]
    fn test_header_survives_tiny_area() {
        let mut term = TestTerminal::with_size(4, 2);
        term.render_widget(MainHeader::new("x"), Rect::new(0, 0, 4, 2));
    }
}

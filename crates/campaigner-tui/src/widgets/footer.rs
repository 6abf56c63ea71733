//! Footer bar: key hints for the current screen, or the copy notice

use campaigner_app::{AppState, Screen};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.state.alert.is_some() {
            return &[("Enter", "dismiss")];
        }
        match &self.state.screen {
            Screen::Editing(form) if form.preview.is_some() => {
                &[("Esc", "close"), ("↑↓", "scroll"), ("Ctrl+S", "create")]
            }
            Screen::Editing(form) if form.submitting => &[("Ctrl+C", "quit")],
            Screen::Editing(_) => &[
                ("Tab", "next"),
                ("Space", "toggle"),
                ("Ctrl+P", "preview"),
                ("Ctrl+S", "create"),
                ("Esc", "quit"),
            ],
            Screen::Reviewing(_) => &[
                ("c", "copy payload"),
                ("u", "copy URL"),
                ("n", "new integration"),
                ("↑↓", "scroll"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        if let Some(notice) = self.state.review().and_then(|r| r.notice.as_ref()) {
            Line::from(vec![
                Span::styled(" ✓ ", styles::status_green()),
                Span::styled(notice.text.clone(), styles::status_green()),
            ])
            .render(area, buf);
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use campaigner_app::Alert;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 1);
        let area = term.area();
        term.render_widget(Footer::new(state), area);
        term
    }

    #[test]
    fn test_form_hints() {
        let state = create_test_state();
        let term = render(&state);
        assert!(term.buffer_contains("Ctrl+S create"));
        assert!(term.buffer_contains("Ctrl+P preview"));
    }

    #[test]
    fn test_alert_hint_takes_precedence() {
        let mut state = create_test_state();
        state.alert = Some(Alert::error("boom"));
        let term = render(&state);
        assert!(term.buffer_contains("Enter dismiss"));
        assert!(!term.buffer_contains("Ctrl+S"));
    }

    #[test]
    fn test_submitting_hides_form_actions() {
        let mut state = create_test_state();
        state.form_mut().unwrap().submitting = true;
        let term = render(&state);
        assert!(term.buffer_contains("Ctrl+C quit"));
        assert!(!term.buffer_contains("Ctrl+S"));
    }
}

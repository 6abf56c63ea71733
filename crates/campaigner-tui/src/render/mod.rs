//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use campaigner_app::{AppState, Screen};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Only the scroll states are written back: they learn the content and
/// viewport sizes of this frame.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let subtitle = match &state.screen {
        Screen::Editing(_) => "New campaign",
        Screen::Reviewing(_) => "Integration created",
    };
    frame.render_widget(widgets::MainHeader::new(subtitle), areas.header);

    match &mut state.screen {
        Screen::Editing(form) => {
            frame.render_widget(widgets::CampaignFormView::new(form), areas.body);
            if let Some(preview) = &mut form.preview {
                frame.render_stateful_widget(
                    widgets::PreviewModal::new(&preview.payload),
                    area,
                    &mut preview.scroll,
                );
            }
        }
        Screen::Reviewing(review) => {
            let review = review.as_mut();
            let mut scroll = std::mem::take(&mut review.scroll);
            frame.render_stateful_widget(
                widgets::SuccessView::new(review),
                areas.body,
                &mut scroll,
            );
            review.scroll = scroll;
        }
    }

    frame.render_widget(widgets::Footer::new(state), areas.footer);

    if let Some(alert) = &state.alert {
        frame.render_widget(widgets::AlertModal::new(alert), area);
    }
}

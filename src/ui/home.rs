//! Home page UI rendering
//!
//! A centered column with the page label and the theme toggle button.

use eframe::egui;
use egui::{CornerRadius, RichText};
use crate::app::AppState;
use theme_toggle::{Mode, Palette};

/// Vertical gap between the label and the button
const CONTENT_GAP: f32 = 48.0;
/// Approximate height of the label, gap and button, used for vertical centering
const CONTENT_HEIGHT: f32 = 36.0 + CONTENT_GAP + 36.0;

/// Result of user interaction with the home page
pub enum HomeInteraction {
    /// User clicked the toggle button
    ToggleThemeRequested,
}

/// Text shown on the toggle button for the current mode.
pub fn toggle_label(mode: Mode) -> String {
    format!("Toggle theme - {}", mode)
}

/// Renders the home page centered in the available area
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HomeInteraction>` - User interaction result
pub fn render_home(ui: &mut egui::Ui, state: &AppState) -> Option<HomeInteraction> {
    let palette = Palette::for_mode(state.theme.resolved());
    let mut interaction = None;

    ui.vertical_centered(|ui| {
        let free_height = (ui.available_height() - CONTENT_HEIGHT).max(0.0);
        ui.add_space(free_height / 2.0);

        ui.label(
            RichText::new("Home!")
                .size(30.0)
                .strong()
                .color(palette.primary),
        );

        ui.add_space(CONTENT_GAP);

        ui.scope(|ui| {
            // Pill-shaped primary button
            ui.spacing_mut().button_padding = egui::vec2(8.0, 8.0);
            let widgets = &mut ui.visuals_mut().widgets;
            for (visuals, fill) in [
                (&mut widgets.inactive, palette.primary),
                (&mut widgets.hovered, palette.primary_hover),
                (&mut widgets.active, palette.primary_hover),
            ] {
                visuals.weak_bg_fill = fill;
                visuals.bg_fill = fill;
                visuals.corner_radius = CornerRadius::same(u8::MAX);
            }

            let button = egui::Button::new(
                RichText::new(toggle_label(state.theme.mode()))
                    .size(14.0)
                    .color(palette.on_primary),
            );

            if ui.add(button).clicked() {
                interaction = Some(HomeInteraction::ToggleThemeRequested);
            }
        });
    });

    interaction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_reflects_mode() {
        assert_eq!(toggle_label(Mode::Light), "Toggle theme - light");
        assert_eq!(toggle_label(Mode::Dark), "Toggle theme - dark");
        assert_eq!(toggle_label(Mode::System), "Toggle theme - system");
    }
}

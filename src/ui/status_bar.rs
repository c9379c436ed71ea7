//! Status bar UI rendering
//!
//! Handles the bottom status bar describing the theme preference.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use theme_toggle::{Palette, ThemeContext};

/// Summary line for the status bar.
pub fn status_text(theme: &ThemeContext) -> String {
    let rendering = match theme.forced_mode() {
        Some(forced) => format!("{} (forced {})", theme.resolved(), forced),
        None => theme.resolved().to_string(),
    };
    let storage = if theme.is_persistent() { "saved" } else { "memory only" };

    format!(
        "Preference: {} | Rendering: {} | Storage: {}",
        theme.mode(),
        rendering,
        storage
    )
}

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let palette = Palette::for_mode(state.theme.resolved());
    ui.horizontal(|ui| {
        ui.label(RichText::new(status_text(&state.theme)).small().color(palette.text_dim));
    });
}

//! Panel orchestration and layout management.
//!
//! Lays out the status bar and the home page and forwards their interactions.

use crate::app::AppState;
use crate::ui::{home, status_bar};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// User asked to flip the theme
    ToggleThemeRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(home_interaction) = home::render_home(ui, state) {
                interaction = Some(match home_interaction {
                    home::HomeInteraction::ToggleThemeRequested => {
                        PanelInteraction::ToggleThemeRequested
                    }
                });
            }
        });

        interaction
    }
}

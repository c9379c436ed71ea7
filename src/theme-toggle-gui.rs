//! Theme Toggle GUI Application
//!
//! A single page with a label and a button that flips the window between light
//! and dark. The preference is persisted and restored on the next start.
//!
//! The application is built with a small modular architecture:
//! - `app/` - Application state and theme coordination
//! - `ui/` - Panel rendering (home page, status bar)
//! - `config` - Command-line configuration

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod ui;

use app::{AppState, ThemeCoordinator};
use config::{Cli, Config, APP_NAME};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes logging and launches the GUI.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_config()?;
    tracing::debug!(?config, "Configuration loaded");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_title(APP_NAME),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(ThemeToggleApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the GUI: {e}"))
}

/// The theme toggle application.
///
/// Delegates to coordinators:
/// - `ThemeCoordinator` builds the theme context, persists it and keeps the window in sync
/// - `PanelManager` handles UI panel layout and rendering
struct ThemeToggleApp {
    /// Centralized application state
    state: AppState,
}

impl ThemeToggleApp {
    /// Creates the app with the theme preference restored from storage.
    fn new(cc: &eframe::CreationContext, config: &Config) -> Self {
        let mut state = ThemeCoordinator::create_state(config, cc.storage);
        ThemeCoordinator::sync_system_theme(&cc.egui_ctx, &mut state);
        ThemeCoordinator::attach(&cc.egui_ctx, &mut state);
        Self { state }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::ToggleThemeRequested => {
                ThemeCoordinator::toggle(&mut self.state);
            }
        }
    }
}

impl eframe::App for ThemeToggleApp {
    /// Called when the app is being shut down - ensures the preference is saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_to_storage(&self.state, storage);
    }

    /// Main update loop.
    ///
    /// 1. Pick up OS theme changes
    /// 2. Render all panels via PanelManager
    /// 3. Handle panel interactions
    /// 4. Persist a changed preference right away
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ThemeCoordinator::sync_system_theme(ctx, &mut self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &self.state) {
            self.handle_panel_interaction(interaction);
        }

        if let Some(storage) = frame.storage_mut() {
            ThemeCoordinator::save_to_storage(&self.state, storage);
        }
    }
}

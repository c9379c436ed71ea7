//! Theme context construction, persistence and window synchronization.
//!
//! Builds the [`ThemeContext`] from configuration at startup, writes preference
//! changes into eframe's storage, keeps the observed OS preference up to date,
//! and applies the resolved variant to the egui window through a subscription.

use crate::app::AppState;
use crate::config::{Config, StoreLocation};
use theme_toggle::{EframeStore, FileStore, Mode, Palette, ResolvedMode, ThemeChange, ThemeContext};
use tracing::{debug, info, warn};

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Creates the application state during startup.
    ///
    /// `storage` is eframe's app storage from the creation context. When it is
    /// missing, or a `--store` file cannot be opened, the theme is kept in memory.
    pub fn create_state(config: &Config, storage: Option<&dyn eframe::Storage>) -> AppState {
        let options = config.theme.clone();

        match &config.store {
            StoreLocation::AppStorage => match storage {
                Some(storage) => {
                    let store = EframeStore::load(storage, &[options.storage_key.as_str()]);
                    let theme = ThemeContext::initialize(Box::new(store.clone()), options);
                    AppState::new(theme, Some(store))
                }
                None => {
                    warn!("App storage unavailable, theme kept in memory");
                    AppState::new(ThemeContext::in_memory(options), None)
                }
            },
            StoreLocation::File(path) => match FileStore::open(path) {
                Ok(store) => AppState::new(ThemeContext::initialize(Box::new(store), options), None),
                Err(e) => {
                    warn!(error = %e, "Preference file unavailable, theme kept in memory");
                    AppState::new(ThemeContext::in_memory(options), None)
                }
            },
            StoreLocation::Memory => {
                info!("Theme preference will not be persisted");
                AppState::new(ThemeContext::in_memory(options), None)
            }
        }
    }

    /// Writes changed preferences into eframe's storage.
    ///
    /// Called every frame with `frame.storage_mut()` and once more from `save` at
    /// shutdown; it does nothing when there is no pending change.
    pub fn save_to_storage(state: &AppState, storage: &mut dyn eframe::Storage) {
        let Some(store) = state.app_storage.as_ref().filter(|store| store.has_pending()) else {
            return;
        };
        let written = store.write_pending(storage);
        debug!(written, "Theme preference written to app storage");
    }

    /// Installs palette visuals on the egui context and subscribes it to theme
    /// changes. Replaces any previous subscription.
    pub fn attach(ctx: &egui::Context, state: &mut AppState) {
        Self::detach(state);

        for mode in [ResolvedMode::Light, ResolvedMode::Dark] {
            ctx.set_visuals_of(mode.into(), Palette::for_mode(mode).visuals());
        }

        let window = ctx.clone();
        let id = state.theme.subscribe(move |change: &ThemeChange| {
            Self::apply(&window, change.resolved);
            window.request_repaint();
        });
        state.visuals_subscription = Some(id);

        Self::apply(ctx, state.theme.resolved());
    }

    /// Removes the window subscription, if any.
    pub fn detach(state: &mut AppState) {
        if let Some(id) = state.visuals_subscription.take() {
            state.theme.unsubscribe(id);
        }
    }

    /// Feeds the OS preference reported by the windowing backend into the context.
    ///
    /// Called once per frame; the context ignores unchanged values.
    pub fn sync_system_theme(ctx: &egui::Context, state: &mut AppState) {
        let system = ctx.system_theme().map(ResolvedMode::from);
        state.theme.set_system_mode(system);
    }

    /// Handles the toggle button.
    pub fn toggle(state: &mut AppState) -> Mode {
        state.theme.toggle()
    }

    fn apply(ctx: &egui::Context, resolved: ResolvedMode) {
        info!(root = resolved.class_name(), "Applying theme to window");
        ctx.set_theme(egui::Theme::from(resolved));
    }
}

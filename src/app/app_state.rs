//! Centralized application state for the theme toggle GUI.

use theme_toggle::{EframeStore, SubscriptionId, ThemeContext};

/// Main application state.
///
/// The theme context is the single shared theme preference; every panel reads it
/// through this struct rather than holding its own copy.
#[derive(Debug)]
pub struct AppState {
    /// Shared theme preference
    pub theme: ThemeContext,

    /// Handle on the eframe-backed store, when that is where the theme is kept
    pub(crate) app_storage: Option<EframeStore>,

    /// Subscription that keeps the window visuals in sync with the theme
    pub(crate) visuals_subscription: Option<SubscriptionId>,
}

impl AppState {
    pub fn new(theme: ThemeContext, app_storage: Option<EframeStore>) -> Self {
        Self {
            theme,
            app_storage,
            visuals_subscription: None,
        }
    }
}

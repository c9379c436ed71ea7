//! Application-level modules for the theme toggle GUI.
//!
//! This module contains the application state and the coordinator that wires
//! the shared theme context to the window.

mod app_state;
mod theme_coordinator;

pub use app_state::AppState;
pub use theme_coordinator::ThemeCoordinator;

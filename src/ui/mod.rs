//! UI panel rendering subsystem
//!
//! - Home page (centered label and theme toggle button)
//! - Status bar (stored preference, rendered variant, persistence)
//! - Panel manager (panel orchestration and layout)

pub mod home;
pub mod status_bar;
pub mod panel_manager;

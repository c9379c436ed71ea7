//! Persisted light/dark theme preference.
//!
//! [`ThemeContext`] holds the single shared [`Mode`], writes it to a
//! [`PreferenceStore`] on every change and notifies subscribed rendering
//! surfaces. [`Palette`] turns the resolved variant into egui visuals.
//!
//! ```
//! use theme_toggle::{MemoryStore, Mode, ThemeContext, ThemeOptions};
//!
//! let mut theme = ThemeContext::initialize(Box::new(MemoryStore::new()), ThemeOptions::default());
//! assert_eq!(theme.mode(), Mode::System);
//! assert_eq!(theme.toggle(), Mode::Light);
//! assert_eq!(theme.toggle(), Mode::Dark);
//! ```

pub mod mode;
pub mod store;
pub mod context;
pub mod palette;

// Export mode model
pub use mode::{Mode, ResolvedMode, ParseModeError};

// Export persistence
pub use store::{
    PreferenceStore, MemoryStore, EframeStore, FileStore,
    StoreError, StoreResult
};

// Export the shared theme state holder
pub use context::{
    ThemeContext, ThemeOptions, ThemeChange, SubscriptionId,
    DEFAULT_STORAGE_KEY
};

// Export palette support
pub use palette::{Palette, hex_to_color32};

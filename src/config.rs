//! Command-line configuration for the theme toggle GUI.

use anyhow::{ensure, Result};
use clap::Parser;
use std::path::PathBuf;
use theme_toggle::{Mode, ThemeOptions, DEFAULT_STORAGE_KEY};

/// Application name; eframe keys its app storage directory on it.
pub const APP_NAME: &str = "Theme Toggle";

#[derive(Debug, Parser)]
#[command(name = "theme-toggle-gui", version, about = "Light/dark theme toggle with a persisted preference")]
pub struct Cli {
    /// Keep the preference in this JSON file instead of the app storage
    #[arg(long, value_name = "PATH", conflicts_with = "no_persist")]
    pub store: Option<PathBuf>,

    /// Keep the preference in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Key the preference is stored under
    #[arg(long, value_name = "KEY", default_value = DEFAULT_STORAGE_KEY)]
    pub storage_key: String,

    /// Mode used when nothing is stored: light, dark or system
    #[arg(long, value_name = "MODE", default_value_t = Mode::System)]
    pub default_mode: Mode,

    /// Render with this mode regardless of the stored preference
    #[arg(long, value_name = "MODE")]
    pub force: Option<Mode>,

    /// Resolve `system` to light instead of following the OS
    #[arg(long)]
    pub disable_system: bool,
}

/// Where the theme preference is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// eframe's app storage (the default)
    AppStorage,
    /// Standalone JSON file
    File(PathBuf),
    /// Not persisted
    Memory,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store: StoreLocation,
    pub theme: ThemeOptions,
}

impl Cli {
    pub fn into_config(self) -> Result<Config> {
        let storage_key = self.storage_key.trim().to_string();
        ensure!(!storage_key.is_empty(), "storage key must not be empty");

        let store = match (self.no_persist, self.store) {
            (true, _) => StoreLocation::Memory,
            (false, Some(path)) => StoreLocation::File(path),
            (false, None) => StoreLocation::AppStorage,
        };

        Ok(Config {
            store,
            theme: ThemeOptions {
                storage_key,
                default_mode: self.default_mode,
                forced_mode: self.force,
                enable_system: !self.disable_system,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        let cli = Cli::try_parse_from(std::iter::once("theme-toggle-gui").chain(args.iter().copied()))?;
        cli.into_config()
    }

    #[test]
    fn test_defaults() -> Result<()> {
        let config = parse(&[])?;
        assert_eq!(config.theme, ThemeOptions::default());
        assert_eq!(config.store, StoreLocation::AppStorage);
        Ok(())
    }

    #[test]
    fn test_explicit_options() -> Result<()> {
        let config = parse(&[
            "--store", "/tmp/prefs.json",
            "--storage-key", "appearance",
            "--default-mode", "dark",
            "--force", "light",
            "--disable-system",
        ])?;
        assert_eq!(config.store, StoreLocation::File(PathBuf::from("/tmp/prefs.json")));
        assert_eq!(config.theme.storage_key, "appearance");
        assert_eq!(config.theme.default_mode, Mode::Dark);
        assert_eq!(config.theme.forced_mode, Some(Mode::Light));
        assert!(!config.theme.enable_system);
        Ok(())
    }

    #[test]
    fn test_no_persist_uses_memory() -> Result<()> {
        let config = parse(&["--no-persist"])?;
        assert_eq!(config.store, StoreLocation::Memory);
        Ok(())
    }

    #[test]
    fn test_rejects_bad_mode_and_empty_key() {
        assert!(parse(&["--default-mode", "sepia"]).is_err());
        assert!(parse(&["--storage-key", "  "]).is_err());
        assert!(parse(&["--no-persist", "--store", "x.json"]).is_err());
    }
}

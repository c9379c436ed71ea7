//! Theme mode values and the toggle transition.
//!
//! A [`Mode`] is the user's stored preference. A [`ResolvedMode`] is the concrete
//! variant a rendering surface styles itself with once `system` has been resolved.
//!
//! # Examples
//!
//! ```
//! use theme_toggle::Mode;
//!
//! assert_eq!(Mode::Light.toggled(), Mode::Dark);
//! assert_eq!(Mode::System.toggled(), Mode::Light);
//! assert_eq!("dark".parse::<Mode>().unwrap(), Mode::Dark);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stored theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
    /// Follow the operating system preference
    #[default]
    System,
}

/// Concrete light or dark variant after resolving [`Mode::System`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedMode {
    #[default]
    Light,
    Dark,
}

/// Error returned when a string is not one of `light`, `dark` or `system`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode '{0}' (expected light, dark or system)")]
pub struct ParseModeError(pub String);

impl Mode {
    /// All modes in display order.
    pub const ALL: [Mode; 3] = [Mode::Light, Mode::Dark, Mode::System];

    /// Returns the literal used for storage and display.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
            Mode::System => "system",
        }
    }

    /// Two-value toggle: `light` goes to `dark`, everything else goes to `light`.
    ///
    /// `system` is not part of the cycle; toggling from it always lands on `light`.
    pub fn toggled(self) -> Mode {
        if self == Mode::Light {
            Mode::Dark
        } else {
            Mode::Light
        }
    }

    /// Resolves this preference to a concrete variant.
    ///
    /// `system` uses `system_hint` when known and falls back to light otherwise.
    pub fn resolve(self, system_hint: Option<ResolvedMode>) -> ResolvedMode {
        match self {
            Mode::Light => ResolvedMode::Light,
            Mode::Dark => ResolvedMode::Dark,
            Mode::System => system_hint.unwrap_or_default(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            "system" => Ok(Mode::System),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl ResolvedMode {
    /// Root-level marker consumed by the styling layer.
    pub fn class_name(self) -> &'static str {
        match self {
            ResolvedMode::Light => "light",
            ResolvedMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ResolvedMode::Dark
    }
}

impl fmt::Display for ResolvedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl From<egui::Theme> for ResolvedMode {
    fn from(theme: egui::Theme) -> Self {
        match theme {
            egui::Theme::Light => ResolvedMode::Light,
            egui::Theme::Dark => ResolvedMode::Dark,
        }
    }
}

impl From<ResolvedMode> for egui::Theme {
    fn from(resolved: ResolvedMode) -> Self {
        match resolved {
            ResolvedMode::Light => egui::Theme::Light,
            ResolvedMode::Dark => egui::Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_two_value_cycle() {
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
        assert_eq!(Mode::Dark.toggled(), Mode::Light);
        assert_eq!(Mode::System.toggled(), Mode::Light);
    }

    #[test]
    fn test_parse_accepts_literals_case_insensitively() {
        assert_eq!("light".parse::<Mode>(), Ok(Mode::Light));
        assert_eq!(" Dark ".parse::<Mode>(), Ok(Mode::Dark));
        assert_eq!("SYSTEM".parse::<Mode>(), Ok(Mode::System));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "sepia".parse::<Mode>().unwrap_err();
        assert_eq!(err, ParseModeError("sepia".to_string()));
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_serde_uses_lowercase_literals() {
        assert_eq!(serde_json::to_string(&Mode::System).unwrap(), "\"system\"");
        let parsed: Mode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, Mode::Dark);
    }

    #[test]
    fn test_resolve_system_uses_hint() {
        assert_eq!(Mode::System.resolve(Some(ResolvedMode::Dark)), ResolvedMode::Dark);
        assert_eq!(Mode::System.resolve(None), ResolvedMode::Light);
        assert_eq!(Mode::Light.resolve(Some(ResolvedMode::Dark)), ResolvedMode::Light);
        assert_eq!(Mode::Dark.resolve(None), ResolvedMode::Dark);
    }

    #[test]
    fn test_default_is_system() {
        assert_eq!(Mode::default(), Mode::System);
    }
}

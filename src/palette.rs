//! Light and dark color palettes.
//!
//! Each [`ResolvedMode`] maps to one [`Palette`]. Applying a palette starts from
//! egui's stock visuals for that variant and overrides the colors the page uses.
//!
//! # Examples
//!
//! ```
//! use theme_toggle::{Palette, ResolvedMode};
//!
//! let dark = Palette::for_mode(ResolvedMode::Dark);
//! let visuals = dark.visuals();
//! assert!(visuals.dark_mode);
//! ```

use crate::mode::ResolvedMode;
use egui::Color32;

/// Color palette for one resolved mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub mode: ResolvedMode,

    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub primary: Color32,
    pub primary_hover: Color32,
    pub on_primary: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
}

impl Palette {
    pub fn for_mode(mode: ResolvedMode) -> Palette {
        match mode {
            ResolvedMode::Light => light_palette(),
            ResolvedMode::Dark => dark_palette(),
        }
    }

    /// Returns egui visuals for this palette.
    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = match self.mode {
            ResolvedMode::Light => egui::Visuals::light(),
            ResolvedMode::Dark => egui::Visuals::dark(),
        };
        self.apply(&mut visuals);
        visuals
    }

    /// Overrides the palette's colors on existing visuals.
    pub fn apply(&self, visuals: &mut egui::Visuals) {
        visuals.dark_mode = self.mode.is_dark();

        visuals.panel_fill = self.panel_background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = self.extreme_background;
        visuals.faint_bg_color = self.hover;

        visuals.override_text_color = Some(self.text);

        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke.color = self.primary;

        visuals.widgets.noninteractive.bg_fill = self.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.bg_fill = self.hover;
        visuals.widgets.hovered.bg_fill = self.hover;
        visuals.widgets.active.bg_fill = self.selection;

        visuals.hyperlink_color = self.primary;
    }
}

fn light_palette() -> Palette {
    Palette {
        mode: ResolvedMode::Light,
        background: hex_to_color32("#f8f8f8"),
        panel_background: hex_to_color32("#f8f8f8"),
        extreme_background: hex_to_color32("#ffffff"),
        text: hex_to_color32("#111827"),
        text_dim: hex_to_color32("#6b7280"),
        primary: hex_to_color32("#2563eb"),
        primary_hover: hex_to_color32("#3b82f6"),
        on_primary: Color32::WHITE,
        selection: hex_to_color32("#b4c8ff"),
        hover: hex_to_color32("#dcdcdc"),
        border: hex_to_color32("#a0a0a0"),
    }
}

fn dark_palette() -> Palette {
    Palette {
        mode: ResolvedMode::Dark,
        background: hex_to_color32("#272727"),
        panel_background: hex_to_color32("#272727"),
        extreme_background: hex_to_color32("#101010"),
        text: hex_to_color32("#f3f4f6"),
        text_dim: hex_to_color32("#a0a0a0"),
        primary: hex_to_color32("#3b82f6"),
        primary_hover: hex_to_color32("#60a5fa"),
        on_primary: Color32::WHITE,
        selection: hex_to_color32("#325078"),
        hover: hex_to_color32("#464646"),
        border: hex_to_color32("#646464"),
    }
}

/// Parses a `#rrggbb` (or bare `rrggbb`) color.
///
/// Anything that is not exactly six hex digits yields black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Color32::BLACK;
    }

    match u32::from_str_radix(digits, 16) {
        Ok(rgb) => {
            let [_, r, g, b] = rgb.to_be_bytes();
            Color32::from_rgb(r, g, b)
        }
        Err(_) => Color32::BLACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ff8000"), Color32::from_rgb(255, 128, 0));
        assert_eq!(hex_to_color32("101010"), Color32::from_rgb(16, 16, 16));
        assert_eq!(hex_to_color32("#fff"), Color32::BLACK);
        assert_eq!(hex_to_color32("#12345g"), Color32::BLACK);
        assert_eq!(hex_to_color32("+fffff"), Color32::BLACK);
    }

    #[test]
    fn test_visuals_follow_mode() {
        assert!(!Palette::for_mode(ResolvedMode::Light).visuals().dark_mode);

        let dark = Palette::for_mode(ResolvedMode::Dark);
        let visuals = dark.visuals();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.panel_fill, dark.panel_background);
        assert_eq!(visuals.override_text_color, Some(dark.text));
    }
}

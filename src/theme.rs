//! Theme support for the gallery viewer
//!
//! Provides color palettes for the viewer chrome and the carousel itself, with
//! built-in themes (Light, Dark, Dracula) behind a small theme manager.
//!
//! # Examples
//!
//! ```
//! use minigallery::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula caret: {:?}", dracula.colors.caret);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when nothing else is selected.
pub const DEFAULT_THEME: &str = "Dark";

/// Color palette covering the viewer and the carousel
#[derive(Debug, Clone)]
pub struct GalleryPalette {
    // Chrome
    pub background: Color32,
    pub panel_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub border: Color32,
    pub error: Color32,

    // Navigation
    pub link: Color32,
    pub link_active: Color32,
    pub link_hover: Color32,
    pub caret: Color32,

    // Carousel
    pub viewport: Color32,
    pub item_fill: Color32,
    pub item_text: Color32,
}

/// A theme definition with metadata and palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: GalleryPalette,
}

/// Registry of built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a manager holding all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme(), dracula_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self { themes }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the default theme
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or_else(|| unreachable!("built-in theme {} is always registered", DEFAULT_THEME))
    }

    /// Returns all theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's palette to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.background;
        visuals.override_text_color = Some(colors.text);

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.hovered.bg_fill = colors.link_hover;
        visuals.selection.bg_fill = colors.link_hover;
        visuals.selection.stroke.color = colors.link_active;
        visuals.hyperlink_color = colors.link;
        visuals.error_fg_color = colors.error;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default chrome".to_string(),
        colors: GalleryPalette {
            background: Color32::from_rgb(255, 255, 255),
            panel_background: Color32::from_rgb(248, 248, 248),
            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),
            border: Color32::from_rgb(160, 160, 160),
            error: Color32::from_rgb(200, 40, 40),

            link: Color32::from_rgb(40, 100, 200),
            link_active: Color32::from_rgb(0, 0, 0),
            link_hover: Color32::from_rgb(220, 220, 220),
            caret: Color32::from_rgb(230, 120, 20),

            viewport: Color32::from_rgb(236, 236, 236),
            item_fill: Color32::from_rgb(180, 200, 255),
            item_text: Color32::from_rgb(0, 0, 0),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default chrome".to_string(),
        colors: GalleryPalette {
            background: Color32::from_rgb(16, 16, 16),
            panel_background: Color32::from_rgb(39, 39, 39),
            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),
            border: Color32::from_rgb(100, 100, 100),
            error: Color32::from_rgb(231, 76, 60),

            link: Color32::from_rgb(52, 152, 219),
            link_active: Color32::from_rgb(255, 255, 255),
            link_hover: Color32::from_rgb(70, 70, 70),
            caret: Color32::from_rgb(243, 156, 18),

            viewport: Color32::from_rgb(24, 24, 24),
            item_fill: Color32::from_rgb(50, 80, 120),
            item_text: Color32::from_rgb(255, 255, 255),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Dracula color palette".to_string(),
        colors: GalleryPalette {
            background: hex_to_color32("#21222c"),
            panel_background: hex_to_color32("#282a36"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            border: hex_to_color32("#6272a4"),
            error: hex_to_color32("#ff5555"),

            link: hex_to_color32("#8be9fd"),
            link_active: hex_to_color32("#f8f8f2"),
            link_hover: hex_to_color32("#44475a"),
            caret: hex_to_color32("#ff79c6"),

            viewport: hex_to_color32("#21222c"),
            item_fill: hex_to_color32("#44475a"),
            item_text: hex_to_color32("#f8f8f2"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    parse_hex_color(hex).unwrap_or(Color32::BLACK)
}

/// Parses a `#rrggbb` color, returning None for anything else
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Scales a color's alpha by `opacity` in `[0, 1]`
pub fn with_alpha(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_are_listed_sorted() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let manager = ThemeManager::new();
        assert_eq!(manager.theme_or_default("Solarized").name, DEFAULT_THEME);
    }

    #[test]
    fn test_apply_theme_uses_palette_roles() {
        let manager = ThemeManager::new();
        for name in manager.list_themes() {
            let theme = manager.theme_or_default(name);
            let mut visuals = egui::Visuals::dark();
            manager.apply_theme(theme, &mut visuals);

            assert_eq!(visuals.error_fg_color, theme.colors.error);
            assert_eq!(visuals.widgets.hovered.bg_fill, theme.colors.link_hover);
            assert_ne!(theme.colors.text_dim, theme.colors.text);
        }
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(parse_hex_color("#ff0080"), Some(Color32::from_rgb(255, 0, 128)));
        assert_eq!(parse_hex_color("ff0080"), Some(Color32::from_rgb(255, 0, 128)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(hex_to_color32("nonsense"), Color32::BLACK);
    }
}

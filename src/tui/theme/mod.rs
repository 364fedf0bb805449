//! Theme configuration for the editor chrome
//!
//! Swatches draw in their own colors; everything around them stays grayscale.

pub mod icons;
pub mod palette;

pub use icons::Icons;
pub use palette::Palette;

use harmonia::Rgb;
use ratatui::style::Color;
use ratatui::symbols::border;

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::MONO,
            icons: Icons::nerd(),
        }
    }

    pub fn border_set(&self) -> border::Set<'static> {
        border::ROUNDED
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the theme (always Mono)
pub fn get_theme() -> Theme {
    Theme::new()
}

pub fn to_tui_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

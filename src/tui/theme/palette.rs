//! Chrome colors - monochrome grayscale

use ratatui::style::Color;

/// Grayscale chrome palette, kept neutral so swatches read true
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub selected_border: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub const MONO: Self = Self {
        fg_primary: Color::Rgb(255, 255, 255),    // #ffffff
        fg_secondary: Color::Rgb(136, 136, 136),  // #888888
        accent: Color::Rgb(255, 255, 255),        // #ffffff
        accent_alt: Color::Rgb(200, 200, 200),    // #c8c8c8
        border: Color::Rgb(64, 64, 64),           // #404040
        selected_border: Color::Rgb(255, 255, 255), // #ffffff
        success: Color::Rgb(200, 200, 200),       // #c8c8c8
        error: Color::Rgb(255, 255, 255),         // #ffffff, errors carry an icon
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::MONO
    }
}

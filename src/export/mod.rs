//! Palette serializations for the presentation layer

use crate::error::{PaletteError, Result};
use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One hex code per line
    Text,
    /// `:root { --color-N: #RRGGBB; }`
    #[default]
    Css,
    /// `[{"hex": "#RRGGBB", "locked": false}, ...]`
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Css, ExportFormat::Json];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Css => "css",
            ExportFormat::Json => "json",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Css => "css",
            ExportFormat::Json => "json",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ExportFormat::Text => ExportFormat::Css,
            ExportFormat::Css => ExportFormat::Json,
            ExportFormat::Json => ExportFormat::Text,
        }
    }

    pub fn render(self, palette: &Palette) -> Result<String> {
        match self {
            ExportFormat::Text => Ok(to_text(palette)),
            ExportFormat::Css => Ok(to_css(palette)),
            ExportFormat::Json => to_json(palette),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(ExportFormat::Text),
            "css" => Ok(ExportFormat::Css),
            "json" => Ok(ExportFormat::Json),
            _ => Err(PaletteError::InvalidConfiguration(format!(
                "unknown export format {s:?} (expected one of: {})",
                Self::ALL.map(ExportFormat::name).join(", ")
            ))),
        }
    }
}

/// Newline-separated hex codes
pub fn to_text(palette: &Palette) -> String {
    palette.hexes().join("\n")
}

/// CSS custom-properties block, numbered from 1
pub fn to_css(palette: &Palette) -> String {
    let mut out = String::from(":root {\n");
    for (i, color) in palette.iter().enumerate() {
        out.push_str(&format!("--color-{}: {};\n", i + 1, color.hex));
    }
    out.push('}');
    out
}

pub fn to_json(palette: &Palette) -> Result<String> {
    serde_json::to_string_pretty(palette)
        .map_err(|e| PaletteError::Serialization(e.to_string()))
}

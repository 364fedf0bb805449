//! Color-harmony palette engine
//!
//! Given a base color and a [`HarmonyType`], derives a palette of related colors,
//! regenerates it while keeping locked slots, and picks readable overlay text.
//!
//! ```
//! use harmonia::{HarmonyType, PaletteEngine};
//!
//! let mut engine = PaletteEngine::new("#FF0000", HarmonyType::Complementary, 4)?;
//! engine.toggle_lock(1)?;
//! engine.set_base("#3366CC")?;
//! let palette = engine.regenerate();
//! assert_eq!(palette.colors()[1].hex, "#00FFFF");
//! # Ok::<(), harmonia::PaletteError>(())
//! ```

pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod export;
pub mod harmony;
pub mod palette;

pub use color::{Hsl, Rgb, hex_to_hsl, hsl_to_hex};
pub use contrast::contrast_text_color;
pub use error::{PaletteError, Result};
pub use export::ExportFormat;
pub use harmony::{HarmonyType, generate_harmony_colors};
pub use palette::{Color, Palette, PaletteEngine};

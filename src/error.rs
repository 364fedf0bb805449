//! Error taxonomy for the palette engine

use thiserror::Error;

/// Errors surfaced synchronously by every public engine entry point.
///
/// A failed operation never leaves the palette half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Input was not a 6-digit hex color (`#RRGGBB` or `RRGGBB`)
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),

    /// Lock/update referenced a slot the palette does not have
    #[error("index {index} out of range for palette of {len} colors")]
    IndexOutOfRange { index: usize, len: usize },

    /// Count or harmony outside what the engine supports
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Export serialization failed
    #[error("serialize palette: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, PaletteError>;

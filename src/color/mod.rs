//! Color space primitives
//!
//! Palette entries travel through the engine as canonical `#RRGGBB` strings.
//! This module owns the only places where those strings are parsed and produced:
//! - [`Rgb`] for byte-level parsing/formatting
//! - [`Hsl`] plus [`hex_to_hsl`] / [`hsl_to_hex`] for harmony math

pub mod hsl;

use crate::error::{PaletteError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

pub use hsl::{Hsl, hex_to_hsl, hsl_to_hex};

/// An 8-bit sRGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` with an optional leading `#`.
    ///
    /// Shorthand (`#RGB`), alpha (`#RRGGBBAA`) and named colors are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 {
            return Err(PaletteError::InvalidColorFormat(input.to_string()));
        }

        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| PaletteError::InvalidColorFormat(input.to_string()))?;

        let [r, g, b] = bytes;
        Ok(Self { r, g, b })
    }

    /// Uniformly random over all 2^24 colors
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let [r, g, b] = rng.random::<[u8; 3]>();
        Self { r, g, b }
    }

    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb(self)
    }

    /// Canonical `#RRGGBB` form (uppercase)
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode_upper([self.r, self.g, self.b]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = PaletteError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

/// Validate a user-supplied hex string and return its canonical form.
pub fn normalize_hex(input: &str) -> Result<String> {
    Rgb::parse(input).map(Rgb::to_hex)
}

/// Whether `input` is a well-formed 6-digit hex color.
pub fn is_valid_hex(input: &str) -> bool {
    Rgb::parse(input).is_ok()
}

/// A uniformly random color in canonical form.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> String {
    Rgb::random(rng).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(Rgb::parse("#3366CC").unwrap(), Rgb::new(0x33, 0x66, 0xCC));
        assert_eq!(Rgb::parse("3366cc").unwrap(), Rgb::new(0x33, 0x66, 0xCC));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#", "#FFF", "#FFFFFFFF", "##FFFFFF", "not-a-color", "#GG0000", " #FFFFFF", "red"] {
            assert_eq!(
                Rgb::parse(bad),
                Err(PaletteError::InvalidColorFormat(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_ascii_input_is_rejected_not_panicking() {
        // six bytes, but not six hex digits
        assert!(Rgb::parse("#ééé").is_err());
    }

    #[test]
    fn test_canonical_form_is_uppercase_with_hash() {
        assert_eq!(normalize_hex("abcdef").unwrap(), "#ABCDEF");
        assert_eq!(Rgb::new(0, 10, 255).to_string(), "#000AFF");
    }

    #[test]
    fn test_random_hex_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let hex = random_hex(&mut rng);
            assert!(is_valid_hex(&hex), "{hex}");
            assert_eq!(hex, hex.to_uppercase());
        }
    }
}

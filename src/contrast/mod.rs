//! Overlay text contrast
//!
//! Uses the simple weighted-channel luminance `(0.299 R + 0.587 G + 0.114 B) / 255`,
//! not WCAG relative luminance. Exported labels and the swatch view depend on the
//! exact black/white split this produces.

use crate::color::Rgb;
use crate::error::Result;

pub const BLACK_HEX: &str = "#000000";
pub const WHITE_HEX: &str = "#FFFFFF";

const LIGHT_THRESHOLD: f64 = 0.5;

/// Weighted luminance in `[0, 1]`.
pub fn luminance(rgb: Rgb) -> f64 {
    (0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b)) / 255.0
}

/// Black for light backgrounds (luminance strictly above 0.5), white otherwise.
pub fn contrast_text_rgb(background: Rgb) -> Rgb {
    if luminance(background) > LIGHT_THRESHOLD {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// `#000000` or `#FFFFFF`, whichever reads better on `hex`.
pub fn contrast_text_color(hex: &str) -> Result<&'static str> {
    let rgb = Rgb::parse(hex)?;
    Ok(if contrast_text_rgb(rgb) == Rgb::BLACK {
        BLACK_HEX
    } else {
        WHITE_HEX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaletteError;

    #[test]
    fn test_extremes() {
        assert_eq!(contrast_text_color("#000000").unwrap(), "#FFFFFF");
        assert_eq!(contrast_text_color("#FFFFFF").unwrap(), "#000000");
    }

    #[test]
    fn test_mid_gray_follows_formula() {
        // 128 * (0.299 + 0.587 + 0.114) / 255 ~= 0.502
        let l = luminance(Rgb::new(0x80, 0x80, 0x80));
        assert!(l > 0.5);
        assert_eq!(contrast_text_color("#808080").unwrap(), "#000000");

        // 127 / 255 ~= 0.498
        assert_eq!(contrast_text_color("#7F7F7F").unwrap(), "#FFFFFF");
    }

    #[test]
    fn test_channel_weights() {
        // pure green is light under this heuristic, pure blue and red are not
        assert_eq!(contrast_text_color("#00FF00").unwrap(), "#000000");
        assert_eq!(contrast_text_color("#0000FF").unwrap(), "#FFFFFF");
        assert_eq!(contrast_text_color("#FF0000").unwrap(), "#FFFFFF");
        assert_eq!(contrast_text_color("#FFFF00").unwrap(), "#000000");
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            contrast_text_color("white"),
            Err(PaletteError::InvalidColorFormat(_))
        ));
    }
}

//! RGB <-> HSL conversion

use super::Rgb;
use crate::error::Result;

/// Hue in degrees `[0, 360)`, saturation and lightness as fractions `[0, 1]`.
///
/// Only ever an intermediate value: palettes store hex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let max_c = rgb.r.max(rgb.g).max(rgb.b);
        let min_c = rgb.r.min(rgb.g).min(rgb.b);

        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;
        let max = f64::from(max_c) / 255.0;
        let min = f64::from(min_c) / 255.0;

        let l = (max + min) / 2.0;

        // achromatic
        if max_c == min_c {
            return Self { h: 0.0, s: 0.0, l };
        }

        let delta = max - min;
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sector = if max_c == rgb.r {
            (g - b) / delta + if rgb.g < rgb.b { 6.0 } else { 0.0 }
        } else if max_c == rgb.g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self {
            h: normalize_hue(sector * 60.0),
            s,
            l,
        }
    }

    /// Convert back to bytes. Out-of-range components are wrapped/clamped first.
    pub fn to_rgb(self) -> Rgb {
        let h = normalize_hue(self.h);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Same color with the hue rotated by `degrees` (may be negative).
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Same hue/saturation with lightness shifted by `delta` and held inside `[min, max]`.
    pub fn shade(self, delta: f64, min: f64, max: f64) -> Self {
        Self {
            l: (self.l + delta).clamp(min, max),
            ..self
        }
    }
}

/// Wrap any hue (including negatives) into `[0, 360)`.
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Parse a hex color into HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Rgb::parse(hex).map(Hsl::from_rgb)
}

/// Format an HSL triple as canonical `#RRGGBB`.
///
/// `h` wraps modulo 360; `s` and `l` are clamped into `[0, 1]`, so derived values
/// that overshoot never produce invalid output.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_primaries() {
        let red = hex_to_hsl("#FF0000").unwrap();
        assert!(approx(red.h, 0.0) && approx(red.s, 1.0) && approx(red.l, 0.5));

        let green = hex_to_hsl("00FF00").unwrap();
        assert!(approx(green.h, 120.0));

        let blue = hex_to_hsl("#0000ff").unwrap();
        assert!(approx(blue.h, 240.0));
    }

    #[test]
    fn test_magenta_side_hue_stays_in_range() {
        // red is max and g < b: the +6 sector offset keeps hue positive
        let hsl = hex_to_hsl("#FF0080").unwrap();
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "{}", hsl.h);
    }

    #[test]
    fn test_achromatic() {
        let gray = hex_to_hsl("#808080").unwrap();
        assert!(approx(gray.h, 0.0));
        assert!(approx(gray.s, 0.0));
        assert!(approx(gray.l, 128.0 / 255.0));

        assert!(approx(hex_to_hsl("#FFFFFF").unwrap().l, 1.0));
        assert!(approx(hex_to_hsl("#000000").unwrap().l, 0.0));
    }

    #[test]
    fn test_hsl_to_hex_known_values() {
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#FF0000");
        assert_eq!(hsl_to_hex(180.0, 1.0, 0.5), "#00FFFF");
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.6), "#FF3333");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
        assert_eq!(hsl_to_hex(0.0, 0.0, 1.0), "#FFFFFF");
    }

    #[test]
    fn test_hue_wraps_and_components_clamp() {
        assert_eq!(hsl_to_hex(-180.0, 1.0, 0.5), hsl_to_hex(180.0, 1.0, 0.5));
        assert_eq!(hsl_to_hex(720.0, 1.0, 0.5), "#FF0000");
        assert_eq!(hsl_to_hex(0.0, 3.0, 0.5), "#FF0000");
        assert_eq!(hsl_to_hex(0.0, 1.0, 1.7), "#FFFFFF");
        assert_eq!(hsl_to_hex(0.0, -1.0, -0.2), "#000000");
    }

    #[test]
    fn test_normalize_hue() {
        assert!(approx(normalize_hue(-30.0), 330.0));
        assert!(approx(normalize_hue(360.0), 0.0));
        assert!(approx(normalize_hue(390.0), 30.0));
        assert!(normalize_hue(-1e-18) < 360.0);
    }

    #[test]
    fn test_round_trip_within_one_per_channel() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..1000 {
            let rgb = Rgb::random(&mut rng);
            let hsl = hex_to_hsl(&rgb.to_hex()).unwrap();
            let back = Rgb::parse(&hsl_to_hex(hsl.h, hsl.s, hsl.l)).unwrap();

            for (a, b) in [(rgb.r, back.r), (rgb.g, back.g), (rgb.b, back.b)] {
                assert!(a.abs_diff(b) <= 1, "{rgb} -> {back}");
            }
        }
    }
}

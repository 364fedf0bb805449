//! Harmony generation
//!
//! Every strategy works in HSL space from the base color and always returns the
//! base itself as the first entry. Slots beyond what a strategy naturally yields are
//! filled with progressively darker, then lighter, shades of the strategy's own hues,
//! so output stays deterministic for any supported count.

use crate::color::{self, Hsl, Rgb};
use crate::error::{PaletteError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Smallest palette the engine will build
pub const MIN_COLORS: usize = 1;
/// Largest palette the engine will build
pub const MAX_COLORS: usize = 10;

const ANALOGOUS_STEP: f64 = 30.0;
const COMPLEMENT_STEP: f64 = 0.1;
const SHADE_STEP: f64 = 0.2;
const LIGHTNESS_MIN: f64 = 0.1;
const LIGHTNESS_MAX: f64 = 0.9;
const MONO_SATURATION_MIN: f64 = 0.2;
const MONO_SATURATION_MAX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HarmonyType {
    Monochromatic,
    #[default]
    Analogous,
    Complementary,
    Triadic,
    SplitComplementary,
    Tetradic,
    /// Independent random colors after the base. Unrecognized harmony names
    /// resolve to this under [`HarmonyType::from_name_lenient`].
    Random,
}

impl HarmonyType {
    /// The deterministic strategies, in UI cycling order
    pub const ALL: [HarmonyType; 6] = [
        HarmonyType::Monochromatic,
        HarmonyType::Analogous,
        HarmonyType::Complementary,
        HarmonyType::Triadic,
        HarmonyType::SplitComplementary,
        HarmonyType::Tetradic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HarmonyType::Monochromatic => "monochromatic",
            HarmonyType::Analogous => "analogous",
            HarmonyType::Complementary => "complementary",
            HarmonyType::Triadic => "triadic",
            HarmonyType::SplitComplementary => "split-complementary",
            HarmonyType::Tetradic => "tetradic",
            HarmonyType::Random => "random",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HarmonyType::Monochromatic => "Monochromatic",
            HarmonyType::Analogous => "Analogous",
            HarmonyType::Complementary => "Complementary",
            HarmonyType::Triadic => "Triadic",
            HarmonyType::SplitComplementary => "Split-complementary",
            HarmonyType::Tetradic => "Tetradic",
            HarmonyType::Random => "Random",
        }
    }

    /// Next strategy in [`HarmonyType::ALL`]; `Random` re-enters at the start.
    pub fn next(self) -> Self {
        match Self::ALL.iter().position(|&h| h == self) {
            Some(i) => Self::ALL[(i + 1) % Self::ALL.len()],
            None => Self::ALL[0],
        }
    }

    pub fn prev(self) -> Self {
        match Self::ALL.iter().position(|&h| h == self) {
            Some(i) => Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()],
            None => Self::ALL[Self::ALL.len() - 1],
        }
    }

    /// Parse a name, falling back to [`HarmonyType::Random`] when it is not recognized.
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(harmony = name, "unrecognized harmony type, using random colors");
            HarmonyType::Random
        })
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyType {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "monochromatic" | "mono" => Ok(HarmonyType::Monochromatic),
            "analogous" => Ok(HarmonyType::Analogous),
            "complementary" => Ok(HarmonyType::Complementary),
            "triadic" => Ok(HarmonyType::Triadic),
            "splitcomplementary" => Ok(HarmonyType::SplitComplementary),
            "tetradic" => Ok(HarmonyType::Tetradic),
            "random" => Ok(HarmonyType::Random),
            _ => Err(PaletteError::InvalidConfiguration(format!(
                "unknown harmony type {s:?} (expected one of: {})",
                Self::ALL.map(HarmonyType::name).join(", ")
            ))),
        }
    }
}

/// Reject counts outside [`MIN_COLORS`]..=[`MAX_COLORS`].
pub fn validate_count(count: usize) -> Result<()> {
    if (MIN_COLORS..=MAX_COLORS).contains(&count) {
        Ok(())
    } else {
        Err(PaletteError::InvalidConfiguration(format!(
            "count must be between {MIN_COLORS} and {MAX_COLORS}, got {count}"
        )))
    }
}

/// Derive `count` colors from `base_hex`; the first is always the (canonical) base.
pub fn generate_harmony_colors(
    base_hex: &str,
    harmony: HarmonyType,
    count: usize,
) -> Result<Vec<String>> {
    generate_harmony_colors_with(base_hex, harmony, count, &mut rand::rng())
}

/// Like [`generate_harmony_colors`], drawing any random fill from `rng`.
pub fn generate_harmony_colors_with<R: Rng + ?Sized>(
    base_hex: &str,
    harmony: HarmonyType,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    validate_count(count)?;
    let base = Rgb::parse(base_hex)?;
    let extra = count - 1;

    let mut out = Vec::with_capacity(count);
    out.push(base.to_hex());

    if harmony == HarmonyType::Random {
        out.extend((0..extra).map(|_| color::random_hex(rng)));
    } else {
        out.extend(derive(base.to_hsl(), harmony, extra).into_iter().map(Hsl::to_hex));
    }

    Ok(out)
}

/// The `extra` colors a deterministic strategy adds after the base.
fn derive(base: Hsl, harmony: HarmonyType, extra: usize) -> Vec<Hsl> {
    match harmony {
        HarmonyType::Monochromatic => monochromatic(base, extra),
        HarmonyType::Analogous => analogous(base, extra),
        HarmonyType::Complementary => complementary(base, extra),
        HarmonyType::Triadic => {
            let anchors = [base, base.rotate(120.0), base.rotate(240.0)];
            with_shades(&anchors[1..], &anchors, extra)
        }
        HarmonyType::SplitComplementary => {
            let natural = [base.rotate(150.0), base.rotate(210.0)];
            let anchors = [base, base.rotate(180.0), natural[0], natural[1]];
            with_shades(&natural, &anchors, extra)
        }
        HarmonyType::Tetradic => {
            let anchors = [base, base.rotate(90.0), base.rotate(180.0), base.rotate(270.0)];
            with_shades(&anchors[1..], &anchors, extra)
        }
        HarmonyType::Random => Vec::new(),
    }
}

fn monochromatic(base: Hsl, extra: usize) -> Vec<Hsl> {
    (1..=extra)
        .map(|i| {
            let i = i as f64;
            let dl = (i * 0.15) % 0.8 - 0.4;
            let ds = (i * 0.10) % 0.6 - 0.30;
            Hsl {
                h: base.h,
                s: (base.s + ds).clamp(MONO_SATURATION_MIN, MONO_SATURATION_MAX),
                l: (base.l + dl).clamp(LIGHTNESS_MIN, LIGHTNESS_MAX),
            }
        })
        .collect()
}

/// +30, -30, +60, -60, ... around the base hue
fn analogous(base: Hsl, extra: usize) -> Vec<Hsl> {
    (1..=extra)
        .map(|i| {
            let step = ((i + 1) / 2) as f64 * ANALOGOUS_STEP;
            if i % 2 == 1 {
                base.rotate(step)
            } else {
                base.rotate(-step)
            }
        })
        .collect()
}

/// Complement first, then base/complement variants alternating, lightness
/// stepping +0.1, -0.1, +0.2, -0.2, ... per pair.
fn complementary(base: Hsl, extra: usize) -> Vec<Hsl> {
    let complement = base.rotate(180.0);

    let variants = (0..).map(|j: usize| {
        let anchor = if j % 2 == 0 { base } else { complement };
        let pair = j / 2;
        let magnitude = (pair / 2 + 1) as f64 * COMPLEMENT_STEP;
        let delta = if pair % 2 == 0 { magnitude } else { -magnitude };
        anchor.shade(delta, LIGHTNESS_MIN, LIGHTNESS_MAX)
    });

    std::iter::once(complement).chain(variants).take(extra).collect()
}

/// `natural` hues first, then shades of `anchors` (darker by 0.2, lighter by 0.2,
/// darker by 0.4, ...) cycling through the anchors in order.
fn with_shades(natural: &[Hsl], anchors: &[Hsl], extra: usize) -> Vec<Hsl> {
    let shades = (0..).map(|k: usize| {
        let round = k / anchors.len();
        let anchor = anchors[k % anchors.len()];
        let step = (round / 2 + 1) as f64 * SHADE_STEP;
        let delta = if round % 2 == 0 { -step } else { step };
        anchor.shade(delta, LIGHTNESS_MIN, LIGHTNESS_MAX)
    });

    natural.iter().copied().chain(shades).take(extra).collect()
}

use crate::color::{self, normalize_hex};
use crate::error::{PaletteError, Result};
use crate::harmony::{self, HarmonyType};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One palette slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Canonical `#RRGGBB`
    pub hex: String,
    /// Protects the slot from `regenerate` and `randomize`, not from explicit edits
    pub locked: bool,
}

impl Color {
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            locked: false,
        }
    }
}

/// Ordered palette; indices stay stable across regenerations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn hexes(&self) -> Vec<&str> {
        self.colors.iter().map(|c| c.hex.as_str()).collect()
    }

    pub fn locked_count(&self) -> usize {
        self.colors.iter().filter(|c| c.locked).count()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.colors.len() {
            Ok(())
        } else {
            Err(PaletteError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            })
        }
    }

    /// Replace unlocked slots with `fresh`, keep locked ones, and resize to `fresh.len()`.
    ///
    /// Returns how many locked entries survived.
    fn merge(&mut self, fresh: Vec<String>) -> usize {
        let mut preserved = 0;
        let colors: Vec<Color> = fresh
            .into_iter()
            .enumerate()
            .map(|(i, hex)| match self.colors.get(i) {
                Some(existing) if existing.locked => {
                    preserved += 1;
                    existing.clone()
                }
                _ => Color::new(hex),
            })
            .collect();

        self.colors = colors;
        preserved
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Owns the working palette and its generation settings.
///
/// Configuration setters never regenerate on their own; call
/// [`PaletteEngine::regenerate`] to apply them.
#[derive(Debug, Clone)]
pub struct PaletteEngine {
    palette: Palette,
    base: String,
    harmony: HarmonyType,
    count: usize,
}

impl PaletteEngine {
    /// Build an engine and generate its first palette.
    pub fn new(base_hex: &str, harmony: HarmonyType, count: usize) -> Result<Self> {
        harmony::validate_count(count)?;
        let mut engine = Self {
            palette: Palette::default(),
            base: normalize_hex(base_hex)?,
            harmony,
            count,
        };
        engine.regenerate();
        Ok(engine)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn harmony(&self) -> HarmonyType {
        self.harmony
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Reconfigure all three settings and regenerate, honoring existing locks.
    ///
    /// Nothing changes if any argument is invalid.
    pub fn generate_palette(
        &mut self,
        base_hex: &str,
        harmony: HarmonyType,
        count: usize,
    ) -> Result<&Palette> {
        harmony::validate_count(count)?;
        let base = normalize_hex(base_hex)?;

        self.base = base;
        self.harmony = harmony;
        self.count = count;
        Ok(self.regenerate())
    }

    pub fn set_base(&mut self, hex: &str) -> Result<()> {
        self.base = normalize_hex(hex)?;
        Ok(())
    }

    pub fn set_harmony(&mut self, harmony: HarmonyType) {
        self.harmony = harmony;
    }

    /// Set the harmony from a free-form name; unknown names select random fill.
    pub fn set_harmony_name(&mut self, name: &str) {
        self.harmony = HarmonyType::from_name_lenient(name);
    }

    pub fn set_count(&mut self, count: usize) -> Result<()> {
        harmony::validate_count(count)?;
        self.count = count;
        Ok(())
    }

    /// Recompute harmony colors into every unlocked slot.
    pub fn regenerate(&mut self) -> &Palette {
        self.regenerate_with(&mut rand::rng())
    }

    pub fn regenerate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Palette {
        // base and count were validated when they were set
        let fresh = harmony::generate_harmony_colors_with(&self.base, self.harmony, self.count, rng)
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "engine settings invalid, filling with random colors");
                (0..self.count).map(|_| color::random_hex(rng)).collect()
            });

        let preserved = self.palette.merge(fresh);
        tracing::debug!(
            base = %self.base,
            harmony = %self.harmony,
            count = self.count,
            preserved,
            "regenerated palette"
        );
        &self.palette
    }

    /// Fill every unlocked slot with an independent random color.
    pub fn randomize(&mut self) -> &Palette {
        self.randomize_with(&mut rand::rng())
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Palette {
        let fresh = (0..self.count).map(|_| color::random_hex(rng)).collect();
        let preserved = self.palette.merge(fresh);
        tracing::debug!(count = self.count, preserved, "randomized palette");
        &self.palette
    }

    pub fn toggle_lock(&mut self, index: usize) -> Result<&Palette> {
        self.palette.check_index(index)?;
        let entry = &mut self.palette.colors[index];
        entry.locked = !entry.locked;
        tracing::debug!(index, locked = entry.locked, "toggled lock");
        Ok(&self.palette)
    }

    /// Overwrite the color at `index`, locked or not.
    pub fn update_color(&mut self, index: usize, hex: &str) -> Result<&Palette> {
        let hex = normalize_hex(hex)?;
        self.palette.check_index(index)?;
        tracing::debug!(index, hex = %hex, "updated color");
        self.palette.colors[index].hex = hex;
        Ok(&self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine(base: &str, harmony: HarmonyType, count: usize) -> PaletteEngine {
        PaletteEngine::new(base, harmony, count).unwrap()
    }

    #[test]
    fn test_new_generates_full_palette() {
        let e = engine("#ff0000", HarmonyType::Complementary, 4);
        assert_eq!(e.palette().len(), 4);
        assert_eq!(e.palette().hexes(), vec!["#FF0000", "#00FFFF", "#FF3333", "#33FFFF"]);
        assert!(e.palette().iter().all(|c| !c.locked));
        assert_eq!(e.base(), "#FF0000");
    }

    #[test]
    fn test_count_invariant_through_engine() {
        for harmony in HarmonyType::ALL {
            for count in 3..=10 {
                assert_eq!(engine("#3366CC", harmony, count).palette().len(), count);
            }
        }
    }

    #[test]
    fn test_regenerate_preserves_locked_entries() {
        let mut e = engine("#3366CC", HarmonyType::Analogous, 5);
        e.toggle_lock(1).unwrap();
        e.toggle_lock(3).unwrap();
        let before = e.palette().clone();

        e.set_base("#CC3366").unwrap();
        e.set_harmony(HarmonyType::Triadic);
        e.regenerate();

        let expected = harmony::generate_harmony_colors("#CC3366", HarmonyType::Triadic, 5).unwrap();
        let after = e.palette();
        assert_eq!(after.get(1), before.get(1));
        assert_eq!(after.get(3), before.get(3));
        for i in [0, 2, 4] {
            assert_eq!(after.colors()[i].hex, expected[i]);
            assert!(!after.colors()[i].locked);
            assert_ne!(after.colors()[i], before.colors()[i]);
        }
    }

    #[test]
    fn test_locked_base_slot_survives_base_change() {
        let mut e = engine("#3366CC", HarmonyType::Tetradic, 4);
        e.toggle_lock(0).unwrap();
        e.set_base("#00FF00").unwrap();
        e.regenerate();
        assert_eq!(e.palette().colors()[0].hex, "#3366CC");
        assert!(e.palette().colors()[0].locked);
    }

    #[test]
    fn test_randomize_preserves_locked_entries() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut e = engine("#3366CC", HarmonyType::Analogous, 5);
        e.toggle_lock(1).unwrap();
        e.toggle_lock(3).unwrap();
        let before = e.palette().clone();

        e.randomize_with(&mut rng);

        let after = e.palette();
        assert_eq!(after.len(), 5);
        assert_eq!(after.get(1), before.get(1));
        assert_eq!(after.get(3), before.get(3));
        assert_eq!(after.locked_count(), 2);
        assert!(after.iter().all(|c| color::is_valid_hex(&c.hex)));
        let changed = [0, 2, 4]
            .iter()
            .filter(|&&i| after.colors()[i] != before.colors()[i])
            .count();
        assert!(changed > 0);
    }

    #[test]
    fn test_count_growth_appends_and_shrink_truncates() {
        let mut e = engine("#3366CC", HarmonyType::Triadic, 3);
        e.toggle_lock(2).unwrap();

        e.set_count(6).unwrap();
        e.regenerate();
        assert_eq!(e.palette().len(), 6);
        assert!(e.palette().colors()[2].locked);
        assert!(e.palette().colors()[3..].iter().all(|c| !c.locked));

        e.set_count(2).unwrap();
        e.regenerate();
        assert_eq!(e.palette().len(), 2);
        assert_eq!(e.palette().locked_count(), 0);
    }

    #[test]
    fn test_setters_do_not_regenerate() {
        let mut e = engine("#3366CC", HarmonyType::Analogous, 5);
        let before = e.palette().clone();

        e.set_base("#112233").unwrap();
        e.set_harmony(HarmonyType::Tetradic);
        e.set_count(8).unwrap();

        assert_eq!(e.palette(), &before);
        assert_eq!(e.count(), 8);
        assert_eq!(e.harmony(), HarmonyType::Tetradic);
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let mut e = engine("#3366CC", HarmonyType::Analogous, 5);
        assert!(matches!(e.set_count(0), Err(PaletteError::InvalidConfiguration(_))));
        assert!(matches!(e.set_count(11), Err(PaletteError::InvalidConfiguration(_))));
        assert!(matches!(e.set_base("blue"), Err(PaletteError::InvalidColorFormat(_))));
        assert_eq!(e.count(), 5);
        assert_eq!(e.base(), "#3366CC");

        assert!(PaletteEngine::new("#3366CC", HarmonyType::Analogous, 0).is_err());
    }

    #[test]
    fn test_generate_palette_is_atomic() {
        let mut e = engine("#3366CC", HarmonyType::Analogous, 5);
        let before = e.palette().clone();

        assert!(e.generate_palette("#FF0000", HarmonyType::Triadic, 0).is_err());
        assert!(e.generate_palette("oops", HarmonyType::Triadic, 4).is_err());
        assert_eq!(e.palette(), &before);
        assert_eq!(e.base(), "#3366CC");

        let p = e.generate_palette("#FF0000", HarmonyType::Triadic, 3).unwrap();
        assert_eq!(p.hexes(), vec!["#FF0000", "#00FF00", "#0000FF"]);
    }

    #[test]
    fn test_toggle_lock() {
        let mut e = engine("#3366CC", HarmonyType::Analogous, 3);
        let hex = e.palette().colors()[1].hex.clone();

        assert!(e.toggle_lock(1).unwrap().colors()[1].locked);
        assert!(!e.toggle_lock(1).unwrap().colors()[1].locked);
        assert_eq!(e.palette().colors()[1].hex, hex);

        assert_eq!(
            e.toggle_lock(3).unwrap_err(),
            PaletteError::IndexOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn test_update_color_overrides_lock() {
        let mut e = engine("#3366CC", HarmonyType::Analogous, 3);
        e.toggle_lock(2).unwrap();

        e.update_color(2, "abcdef").unwrap();
        let entry = &e.palette().colors()[2];
        assert_eq!(entry.hex, "#ABCDEF");
        assert!(entry.locked);

        // a later regenerate keeps the manual edit
        e.regenerate();
        assert_eq!(e.palette().colors()[2].hex, "#ABCDEF");
    }

    #[test]
    fn test_update_color_rejects_invalid_hex() {
        let mut e = engine("#3366CC", HarmonyType::Analogous, 3);
        let before = e.palette().clone();

        assert!(matches!(
            e.update_color(0, "not-a-color"),
            Err(PaletteError::InvalidColorFormat(_))
        ));
        assert!(matches!(
            e.update_color(7, "#FFFFFF"),
            Err(PaletteError::IndexOutOfRange { index: 7, len: 3 })
        ));
        assert_eq!(e.palette(), &before);
    }

    #[test]
    fn test_unknown_harmony_name_fills_randomly() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut e = engine("#3366CC", HarmonyType::Analogous, 6);
        e.set_harmony_name("pentadic");
        assert_eq!(e.harmony(), HarmonyType::Random);

        let p = e.regenerate_with(&mut rng);
        assert_eq!(p.len(), 6);
        assert_eq!(p.colors()[0].hex, "#3366CC");
    }

    #[test]
    fn test_palette_serializes_as_list() {
        let e = engine("#FF0000", HarmonyType::Triadic, 3);
        let json = serde_json::to_value(e.palette()).unwrap();
        assert_eq!(json[0]["hex"], "#FF0000");
        assert_eq!(json[2]["locked"], false);
    }
}

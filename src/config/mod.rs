use crate::export::ExportFormat;
use crate::harmony::HarmonyType;
use crate::palette::PaletteEngine;
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub export: ExportConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Seed color, `#RRGGBB`
    pub base: String,
    /// Harmony name; unrecognized names fill the palette with random colors
    pub harmony: String,
    /// Number of colors (1-10)
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    /// Where the TUI writes exported palettes
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            base: defaults::BASE.to_string(),
            harmony: defaults::HARMONY.name().to_string(),
            count: defaults::COUNT,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            dir: defaults::export_dir(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl PaletteConfig {
    pub fn harmony(&self) -> HarmonyType {
        HarmonyType::from_name_lenient(&self.harmony)
    }

    /// Build an engine from the stored settings.
    pub fn engine(&self) -> anyhow::Result<PaletteEngine> {
        PaletteEngine::new(&self.base, self.harmony(), self.count)
            .with_context(|| format!("palette settings (base={}, count={})", self.base, self.count))
    }

    /// Remember the engine's current settings.
    pub fn remember(&mut self, engine: &PaletteEngine) {
        self.base = engine.base().to_string();
        self.harmony = engine.harmony().name().to_string();
        self.count = engine.count();
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    write_config(cfg, &path)
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "harmonia", "harmonia").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        write_config(&cfg, &path)?;
        tracing::debug!(path = %path.display(), "wrote default config");
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn write_config(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.palette.base, "#3366CC");
        assert_eq!(cfg.palette.count, 5);
        assert_eq!(cfg.export.format, ExportFormat::Css);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        let engine = PaletteEngine::new("#abcdef", HarmonyType::Tetradic, 7).unwrap();
        cfg.palette.remember(&engine);
        cfg.export.format = ExportFormat::Json;
        save(&cfg, Some(&path)).unwrap();

        let loaded = load(Some(&path)).unwrap();
        assert_eq!(loaded.palette.base, "#ABCDEF");
        assert_eq!(loaded.palette.harmony(), HarmonyType::Tetradic);
        assert_eq!(loaded.palette.count, 7);
        assert_eq!(loaded.export.format, ExportFormat::Json);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[palette]\nharmony = \"split-complementary\"\n").unwrap();

        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.palette.harmony(), HarmonyType::SplitComplementary);
        assert_eq!(cfg.palette.count, 5);
        assert!(cfg.input.mouse);
    }

    #[test]
    fn test_unknown_harmony_is_lenient() {
        let palette = PaletteConfig {
            harmony: "hexadic".to_string(),
            ..PaletteConfig::default()
        };
        assert_eq!(palette.harmony(), HarmonyType::Random);
        assert_eq!(palette.engine().unwrap().palette().len(), 5);
    }

    #[test]
    fn test_bad_settings_are_reported() {
        let palette = PaletteConfig {
            count: 0,
            ..PaletteConfig::default()
        };
        assert!(palette.engine().is_err());
    }
}

use super::Config;
use crate::harmony::HarmonyType;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const BASE: &str = "#3366CC";
pub const HARMONY: HarmonyType = HarmonyType::Analogous;
pub const COUNT: usize = 5;

pub fn defaults() -> Config {
    Config::default()
}

pub fn export_dir() -> PathBuf {
    ProjectDirs::from("dev", "harmonia", "harmonia")
        .map(|p| p.data_dir().join("exports"))
        .unwrap_or_else(|| std::env::temp_dir().join("harmonia"))
}

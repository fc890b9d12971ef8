use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::SoundError;
use crate::sfx::SoundEffect;

const APP_DIR: &str = "blockfall-sfx";
const SETTINGS_FILE: &str = "settings.json";
/// Overrides `assets_dir` from the settings file when set
pub const ASSETS_ENV: &str = "BLOCKFALL_SFX_ASSETS";

/// Persisted sound settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// 0.0 ..= 1.0, clamped on load
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Set from the environment for this run only, never written back
    #[serde(skip)]
    pub assets_override: Option<PathBuf>,
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets/sounds")
}

fn default_volume() -> f32 {
    1.0
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            volume: default_volume(),
            assets_override: None,
        }
    }
}

impl SoundConfig {
    pub fn from_json(json_str: &str) -> Result<Self, SoundError> {
        let mut config: Self = serde_json::from_str(json_str)?;
        config.volume = clamp_volume(config.volume);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SoundError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Directory clips load from: the env override if any, else `assets_dir`
    pub fn effective_assets_dir(&self) -> &Path {
        self.assets_override.as_deref().unwrap_or(&self.assets_dir)
    }

    /// Fixed location of an effect's clip
    pub fn path_for(&self, effect: SoundEffect) -> PathBuf {
        self.effective_assets_dir().join(effect.file_name())
    }

    pub fn apply_assets_override(&mut self, value: Option<String>) {
        match value {
            Some(dir) if !dir.is_empty() => {
                log::info!("[Settings] Using assets dir from {}: {}", ASSETS_ENV, dir);
                self.assets_override = Some(PathBuf::from(dir));
            }
            _ => self.assets_override = None,
        }
    }

    fn settings_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(SETTINGS_FILE);
        path
    }

    /// Load from the user config dir, falling back to defaults.
    /// The assets env var is applied on top.
    pub fn load() -> Self {
        let mut config = Self::load_from(&Self::settings_path());
        config.apply_assets_override(std::env::var(ASSETS_ENV).ok());
        config
    }

    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::info!("[Settings] No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&contents) {
            Ok(config) => {
                log::debug!("[Settings] Loaded {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("[Settings] Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), SoundError> {
        self.save_to(&Self::settings_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SoundError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SoundError::Config(format!("Failed to create {}: {}", parent.display(), e)))?;
        }
        std::fs::write(path, self.to_json()?)
            .map_err(|e| SoundError::Config(format!("Failed to write {}: {}", path.display(), e)))?;
        log::debug!("[Settings] Saved to {}", path.display());
        Ok(())
    }
}

pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        return default_volume();
    }
    volume.clamp(0.0, 1.0)
}

//! Configuration loading and management

mod aliases;
mod settings;

pub use aliases::{AliasTable, DirectoryAlias};
pub use settings::{GuiSettings, Settings, VoiceSettings};

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory, looking for .voxfile/config.toml.
    /// A missing file yields the defaults.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(".voxfile").join("config.toml");
        if path.exists() {
            return Self::from_file(&path);
        }
        Ok(Self::default())
    }

    /// Resolve the config path (explicit override or .voxfile/config.toml
    /// under the working directory) and load it.
    pub fn load(work_dir: &Path, config_override: Option<&Path>) -> Result<Self> {
        match config_override {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    work_dir.join(path)
                };
                Self::from_file(&path)
            }
            None => Self::from_dir(work_dir),
        }
    }
}

//! Configuration management for the shiny-icons CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_PROTO_URL: &str =
    "https://raw.githubusercontent.com/Furtif/POGOProtos/master/base/base.proto";
pub const DEFAULT_SHINY_URL: &str = "https://pogoapi.net/api/v1/shiny_pokemon.json";
pub const DEFAULT_RELEASED_URL: &str = "https://pogoapi.net/api/v1/released_pokemon.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Proto file holding the `HoloPokemonId` and `Form` enums
    pub proto_url: String,
    pub shiny_url: String,
    pub released_url: String,
    /// Per-request timeout for the downloads
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            proto_url: DEFAULT_PROTO_URL.to_owned(),
            shiny_url: DEFAULT_SHINY_URL.to_owned(),
            released_url: DEFAULT_RELEASED_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("shiny-icons");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#![warn(clippy::all, clippy::pedantic)]

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::GameConfig;
use crate::error::PhysicsError;

// Default config file path
const CONFIG_FILE_PATH: &str = "config/blockfield.toml";

// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "BLOCKFIELD_CONFIG";

// Load the configuration from the default location
pub fn load_config_from_file() -> Result<GameConfig, ConfigError> {
    load_config_from_path(&get_config_file_path())
}

// Load the configuration from `path`, writing defaults there if it is missing
pub fn load_config_from_path(path: &Path) -> Result<GameConfig, ConfigError> {
    if !path.exists() {
        info!("No config at {}, writing defaults", path.display());
        let default_config = GameConfig::default();
        save_config_to_path(&default_config, path)?;
        return Ok(default_config);
    }

    let contents = fs::read_to_string(path)?;
    let config: GameConfig = toml::from_str(&contents)?;
    config.validate()?;
    debug!("Loaded config from {}: {config:?}", path.display());
    Ok(config)
}

pub fn save_config_to_path(config: &GameConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)?;
    Ok(())
}

// Get the path to the config file
#[must_use]
pub fn get_config_file_path() -> PathBuf {
    // Check for environment variable override
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    // Otherwise use default path in user's config directory
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("blockfield").join("config.toml")
    } else {
        // Fallback to local directory
        PathBuf::from(CONFIG_FILE_PATH)
    }
}

// Custom error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(PhysicsError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config i/o failed: {err}"),
            ConfigError::Parse(err) => write!(f, "config could not be parsed: {err}"),
            ConfigError::Serialize(err) => write!(f, "config could not be written: {err}"),
            ConfigError::Invalid(err) => write!(f, "config is invalid: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

impl From<PhysicsError> for ConfigError {
    fn from(err: PhysicsError) -> Self {
        ConfigError::Invalid(err)
    }
}

//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig, FileReputationConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use overboard_application::BoardConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["overboard.toml", ".overboard.toml"];

/// Prefix for environment overrides, e.g. `OVERBOARD_BOARD__NAME=Rust`
const ENV_PREFIX: &str = "OVERBOARD_";

/// Errors from loading a usable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Environment: `OVERBOARD_*`, nested keys split on `__`
    /// 3. Project root: `./overboard.toml` or `./.overboard.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/overboard/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load, validate and convert to a [`BoardConfig`]
    pub fn load_board_config(config_path: Option<&Path>) -> Result<BoardConfig, ConfigError> {
        let config = Self::load(config_path)?;
        config.validate()?;
        Ok(config.to_board_config())
    }

    /// Load only default configuration
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Render the default configuration as TOML, every key spelled out
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        let mut config = FileConfig::default();
        config.reputation = FileReputationConfig::from_rules(&config.reputation.to_rules());
        toml::to_string_pretty(&config)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        // Add explicit config path (highest priority)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/overboard/config.toml if set,
    /// otherwise falls back to ~/.config/overboard/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("overboard").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}

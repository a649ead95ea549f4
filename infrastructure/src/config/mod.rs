//! Configuration file loading for overboard
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `config_path` passed by the caller
//! 2. `OVERBOARD_*` environment variables
//! 3. Project root: `./overboard.toml` or `./.overboard.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/overboard/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBoardConfig, FileConfig, FileLoggingConfig, FileReputationConfig,
    FileVoteDeltas,
};
pub use loader::{ConfigError, ConfigLoader};

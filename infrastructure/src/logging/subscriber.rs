//! Global `tracing` subscriber setup.

use crate::config::FileLoggingConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// The global subscriber could not be installed (usually: one already is)
#[derive(Debug, Error)]
#[error("Failed to initialize tracing: {0}")]
pub struct LoggingInitError(String);

/// Map a verbosity level to a filter
///
/// 0 = warn, 1 = info, 2 = debug, 3+ = trace
pub fn env_filter_for(verbosity: u8) -> EnvFilter {
    match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Filter selected by the `[logging]` section of the config file
pub fn env_filter_from(config: &FileLoggingConfig) -> EnvFilter {
    env_filter_for(config.verbosity)
}

/// Install a fmt subscriber at the configured verbosity
pub fn init_tracing_from(config: &FileLoggingConfig) -> Result<(), LoggingInitError> {
    init_tracing(config.verbosity)
}

/// Install a fmt subscriber for the process
///
/// `RUST_LOG`, when set and valid, takes precedence over `verbosity`.
pub fn init_tracing(verbosity: u8) -> Result<(), LoggingInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| env_filter_for(verbosity));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingInitError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(env_filter_for(0).to_string(), "warn");
        assert_eq!(env_filter_for(1).to_string(), "info");
        assert_eq!(env_filter_for(2).to_string(), "debug");
        assert_eq!(env_filter_for(3).to_string(), "trace");
        assert_eq!(env_filter_for(9).to_string(), "trace");
    }

    #[test]
    fn test_configured_verbosity_selects_filter() {
        let config: crate::config::FileConfig =
            toml::from_str("[logging]\nverbosity = 2\n").unwrap();
        assert_eq!(env_filter_from(&config.logging).to_string(), "debug");
        assert_eq!(
            env_filter_from(&FileLoggingConfig::default()).to_string(),
            "warn"
        );
    }

    #[test]
    fn test_second_init_fails() {
        // Only one global subscriber can ever be installed per process
        let _ = init_tracing(0);
        assert!(init_tracing_from(&FileLoggingConfig { verbosity: 1 }).is_err());
    }
}

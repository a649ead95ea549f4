//! Infrastructure layer for overboard
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileBoardConfig, FileConfig,
    FileLoggingConfig, FileReputationConfig, FileVoteDeltas,
};
pub use logging::{
    LoggingInitError, TracingReputationObserver, env_filter_for, env_filter_from, init_tracing,
    init_tracing_from,
};

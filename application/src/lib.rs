//! Application layer for overboard
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BoardConfig, DEFAULT_BOARD_NAME};
pub use ports::reputation_observer::{NoReputationObserver, ReputationObserver};
pub use use_cases::apply_activity::{
    ActivitySummary, ApplyActivityUseCase, BoardCommand, CommandOutcome,
};

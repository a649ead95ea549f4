//! Application-level configuration.
//!
//! - [`BoardConfig`] — board name and reputation rules

pub mod board_config;

pub use board_config::{BoardConfig, DEFAULT_BOARD_NAME};

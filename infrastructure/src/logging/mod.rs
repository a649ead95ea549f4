//! Logging infrastructure.
//!
//! - [`init_tracing`] installs the process-wide `tracing` subscriber;
//!   [`init_tracing_from`] does so from the `[logging]` config section
//! - [`TracingReputationObserver`] implements the
//!   [`ReputationObserver`](overboard_application::ReputationObserver) port
//!   on top of `tracing`

mod subscriber;
mod tracing_observer;

pub use subscriber::{
    LoggingInitError, env_filter_for, env_filter_from, init_tracing, init_tracing_from,
};
pub use tracing_observer::TracingReputationObserver;

//! `tracing` adapter for the reputation observer port.
//!
//! Reputation changes become `info` events and rejected commands become
//! `warn` events under the `overboard::reputation` target, so they can be
//! filtered independently of the rest of the application logs.

use overboard_application::ReputationObserver;
use overboard_domain::{DomainError, ReputationChange, UserId};
use tracing::{info, warn};

/// Forwards board activity to `tracing` as structured events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReputationObserver;

impl TracingReputationObserver {
    pub fn new() -> Self {
        Self
    }
}

impl ReputationObserver for TracingReputationObserver {
    fn on_reputation_changed(&self, change: &ReputationChange) {
        info!(
            target: "overboard::reputation",
            user = %change.user,
            delta = change.delta,
            reason = %change.reason,
            reputation = change.reputation,
            "Reputation changed"
        );
    }

    fn on_command_rejected(&self, actor: UserId, error: &DomainError) {
        warn!(
            target: "overboard::reputation",
            actor = %actor,
            error = %error,
            "Command rejected"
        );
    }
}

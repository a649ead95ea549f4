//! Reputation observer port
//!
//! Defines the interface for reacting to reputation changes and rejected
//! actions as board commands are applied.

use overboard_domain::{DomainError, ReputationChange, UserId};

/// Callback for board activity
///
/// Implementations live in the infrastructure layer and can forward events
/// to logs, notifications, leaderboards, etc.
pub trait ReputationObserver: Send + Sync {
    /// Called after a vote or acceptance moved an author's reputation
    fn on_reputation_changed(&self, change: &ReputationChange);

    /// Called when a command issued by `actor` was rejected
    fn on_command_rejected(&self, _actor: UserId, _error: &DomainError) {}
}

/// No-op observer for when nobody is listening
pub struct NoReputationObserver;

impl ReputationObserver for NoReputationObserver {
    fn on_reputation_changed(&self, _change: &ReputationChange) {}
}

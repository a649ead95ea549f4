//! Board configuration.
//!
//! [`BoardConfig`] is the application-level view of how a board is opened:
//! its display name and the reputation rules it enforces. Infrastructure
//! builds it from configuration files; tests build it directly.

use overboard_domain::{Board, ReputationRules};
use serde::{Deserialize, Serialize};

/// Default display name for a board
pub const DEFAULT_BOARD_NAME: &str = "Overboard";

/// Settings used to open a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Display name (cosmetic)
    pub name: String,
    /// Point table applied to votes and acceptances
    pub rules: ReputationRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_BOARD_NAME.to_string(),
            rules: ReputationRules::default(),
        }
    }
}

impl BoardConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_rules(mut self, rules: ReputationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Open an empty board with these settings
    pub fn open(&self) -> Board {
        Board::with_rules(self.name.clone(), self.rules)
    }
}

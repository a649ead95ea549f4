//! User entity

use crate::core::id::UserId;
use serde::{Deserialize, Serialize};

/// A registered board member (Entity)
///
/// The reputation counter is only ever moved by the board when something
/// this user wrote is voted on or accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    reputation: i64,
}

impl User {
    pub(crate) fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            reputation: 0,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reputation(&self) -> i64 {
        self.reputation
    }

    /// Reputation after applying `delta`, or `None` if it would overflow
    pub(crate) fn reputation_after(&self, delta: i64) -> Option<i64> {
        self.reputation.checked_add(delta)
    }

    /// Apply a delta and return the new reputation; unchanged on overflow
    pub(crate) fn adjust_reputation(&mut self, delta: i64) -> Option<i64> {
        let reputation = self.reputation_after(delta)?;
        self.reputation = reputation;
        Some(reputation)
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.reputation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_at_zero() {
        let user = User::new(UserId::new(0), "ferris");
        assert_eq!(user.name(), "ferris");
        assert_eq!(user.reputation(), 0);
    }

    #[test]
    fn test_reputation_can_go_negative() {
        let mut user = User::new(UserId::new(0), "ferris");
        assert_eq!(user.adjust_reputation(-1), Some(-1));
        assert_eq!(user.adjust_reputation(10), Some(9));
        assert_eq!(user.to_string(), "ferris (9)");
    }

    #[test]
    fn test_overflow_leaves_reputation_unchanged() {
        let mut user = User::new(UserId::new(0), "ferris");
        assert_eq!(user.adjust_reputation(i64::MAX), Some(i64::MAX));
        assert_eq!(user.reputation_after(1), None);
        assert_eq!(user.adjust_reputation(1), None);
        assert_eq!(user.reputation(), i64::MAX);
    }
}

//! Reputation rules
//!
//! The point table that turns votes and acceptances into reputation.

use super::vote::VoteDirection;
use crate::core::kind::PostKind;
use serde::{Deserialize, Serialize};

/// Reputation deltas for one kind of post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteDeltas {
    /// Applied to the author when the post is upvoted
    pub up_vote: i64,
    /// Applied to the author when the post is downvoted
    pub down_vote: i64,
}

impl VoteDeltas {
    pub const fn new(up_vote: i64, down_vote: i64) -> Self {
        Self { up_vote, down_vote }
    }

    /// Delta for a vote in the given direction
    pub fn for_direction(&self, direction: VoteDirection) -> i64 {
        match direction {
            VoteDirection::Up => self.up_vote,
            VoteDirection::Down => self.down_vote,
        }
    }
}

/// Reputation rules for a board
///
/// Defaults follow the classic table:
///
/// | Event | Delta |
/// |-------|-------|
/// | Question upvoted | +5 |
/// | Question downvoted | 0 |
/// | Answer upvoted | +10 |
/// | Answer downvoted | -1 |
/// | Answer accepted | +15 |
///
/// # Example
///
/// ```
/// use overboard_domain::{PostKind, ReputationRules, VoteDirection};
///
/// let rules = ReputationRules::default();
/// assert_eq!(rules.vote_delta(PostKind::Question, VoteDirection::Up), 5);
/// assert_eq!(rules.vote_delta(PostKind::Answer, VoteDirection::Down), -1);
/// assert_eq!(rules.accepted_answer, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationRules {
    /// Deltas for votes on questions
    pub question: VoteDeltas,
    /// Deltas for votes on answers
    pub answer: VoteDeltas,
    /// Applied to the answerer when their answer is accepted
    pub accepted_answer: i64,
}

impl Default for ReputationRules {
    fn default() -> Self {
        Self {
            question: VoteDeltas::new(5, 0),
            answer: VoteDeltas::new(10, -1),
            accepted_answer: 15,
        }
    }
}

impl ReputationRules {
    /// Deltas for votes on the given kind of post
    pub fn deltas_for(&self, kind: PostKind) -> VoteDeltas {
        match kind {
            PostKind::Question => self.question,
            PostKind::Answer => self.answer,
        }
    }

    /// Delta applied to the author of a post of `kind` voted in `direction`
    pub fn vote_delta(&self, kind: PostKind, direction: VoteDirection) -> i64 {
        self.deltas_for(kind).for_direction(direction)
    }

    /// Get a human-readable description of these rules
    pub fn description(&self) -> String {
        format!(
            "question {:+}/{:+}, answer {:+}/{:+}, accepted {:+}",
            self.question.up_vote,
            self.question.down_vote,
            self.answer.up_vote,
            self.answer.down_vote,
            self.accepted_answer
        )
    }
}

impl std::fmt::Display for ReputationRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

//! Reputation events and audits

use crate::core::id::UserId;
use crate::core::kind::PostKind;
use crate::voting::VoteDirection;
use serde::{Deserialize, Serialize};

/// What caused a reputation change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReputationReason {
    QuestionUpVoted,
    QuestionDownVoted,
    AnswerUpVoted,
    AnswerDownVoted,
    AnswerAccepted,
}

impl ReputationReason {
    /// Reason for a vote on a post of `kind`
    pub fn for_vote(kind: PostKind, direction: VoteDirection) -> Self {
        match (kind, direction) {
            (PostKind::Question, VoteDirection::Up) => ReputationReason::QuestionUpVoted,
            (PostKind::Question, VoteDirection::Down) => ReputationReason::QuestionDownVoted,
            (PostKind::Answer, VoteDirection::Up) => ReputationReason::AnswerUpVoted,
            (PostKind::Answer, VoteDirection::Down) => ReputationReason::AnswerDownVoted,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ReputationReason::QuestionUpVoted => "question_up_voted",
            ReputationReason::QuestionDownVoted => "question_down_voted",
            ReputationReason::AnswerUpVoted => "answer_up_voted",
            ReputationReason::AnswerDownVoted => "answer_down_voted",
            ReputationReason::AnswerAccepted => "answer_accepted",
        }
    }
}

impl std::fmt::Display for ReputationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single applied reputation event
///
/// Returned by every successful vote and acceptance. `delta` may be zero
/// (a downvoted question still produces an event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationChange {
    /// The author whose reputation moved
    pub user: UserId,
    pub delta: i64,
    pub reason: ReputationReason,
    /// Reputation after the change
    pub reputation: i64,
}

impl ReputationChange {
    /// Reputation before the change
    pub fn previous(&self) -> i64 {
        self.reputation - self.delta
    }
}

/// A user's reputation recomputed from vote ledgers and accepted answers
///
/// Counts are per event; points come from the board's rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationBreakdown {
    pub question_up_votes: usize,
    pub question_down_votes: usize,
    pub answer_up_votes: usize,
    pub answer_down_votes: usize,
    pub accepted_answers: usize,
    /// Sum of all deltas
    pub total: i64,
}

//! Domain error types

use super::id::{AnswerId, QuestionId, UserId};
use super::kind::PostKind;
use crate::voting::VoteDirection;
use thiserror::Error;

/// Rejected votes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VotingError {
    #[error("You cannot vote for yourself!")]
    SelfVote,

    #[error("You have already {previous} this {kind}")]
    AlreadyVoted {
        kind: PostKind,
        previous: VoteDirection,
    },
}

/// Rejected answer acceptances
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerAcceptanceError {
    #[error("Only {questioner} can accept this answer as it is their question")]
    NotQuestioner { questioner: String },

    #[error("This question already has an accepted answer")]
    AlreadyAccepted,
}

/// Invalid post content
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} detail cannot be empty", .0.title())]
    EmptyDetail(PostKind),

    #[error("Detail cannot be empty")]
    BlankDetail,
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Voting(#[from] VotingError),

    #[error(transparent)]
    AnswerAcceptance(#[from] AnswerAcceptanceError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    #[error("Unknown answer: {0}")]
    UnknownAnswer(AnswerId),

    #[error("Reputation of {user} cannot move by {delta} without overflowing")]
    ReputationOverflow { user: UserId, delta: i64 },
}

impl DomainError {
    /// Check if this error is a rejected vote
    pub fn is_voting_error(&self) -> bool {
        matches!(self, DomainError::Voting(_))
    }

    /// Check if this error is a rejected acceptance
    pub fn is_acceptance_error(&self) -> bool {
        matches!(self, DomainError::AnswerAcceptance(_))
    }

    /// Check if this error is invalid post content
    pub fn is_validation_error(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

//! Domain layer for overboard
//!
//! This crate contains the core business logic, entities, and value objects
//! of a question-and-answer board. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Board
//!
//! The aggregate root. It creates users and owns every question and answer.
//!
//! ## Voting
//!
//! Questions and answers are **votable**: other users may vote on them once
//! each, and the author's reputation moves by a per-kind delta. Authors may
//! never vote on their own posts.
//!
//! ## Acceptance
//!
//! The author of a question may accept exactly one answer, which rewards the
//! answerer.

pub mod board;
pub mod core;
pub mod voting;

// Re-export commonly used types
pub use board::{
    Actor, Answer, Board, Question, ReputationBreakdown, ReputationChange, ReputationReason, User,
};
pub use self::core::{
    detail::Detail,
    error::{AnswerAcceptanceError, DomainError, ValidationError, VotingError},
    id::{AnswerId, QuestionId, UserId},
    kind::PostKind,
};
pub use voting::{ReputationRules, Votable, VotableId, VoteDeltas, VoteDirection, VoteLedger};

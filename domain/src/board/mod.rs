//! Board domain
//!
//! The [`Board`] aggregate owns users, questions and answers. Users act on it
//! through an [`Actor`]:
//!
//! - ask a question, answer a question
//! - upvote or downvote someone else's question or answer
//! - accept an answer to their own question
//!
//! Votes and acceptances move the reputation of the post's author according
//! to the board's [`ReputationRules`](crate::voting::ReputationRules).

pub mod aggregate;
pub mod answer;
pub mod question;
pub mod reputation;
pub mod user;

// Re-export main types
pub use aggregate::{Actor, Board};
pub use answer::Answer;
pub use question::Question;
pub use reputation::{ReputationBreakdown, ReputationChange, ReputationReason};
pub use user::User;

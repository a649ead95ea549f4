//! Voting domain
//!
//! Questions and answers share one capability: users vote on them, and each
//! vote moves the author's reputation by an amount that depends on the kind
//! of post.
//!
//! ```text
//! User ──vote──▶ Votable (Question | Answer)
//!                  │  author guard + VoteLedger
//!                  ▼
//!             ReputationRules ──delta──▶ author's reputation
//! ```

pub mod ledger;
pub mod rule;
pub mod votable;
pub mod vote;

// Re-export main types
pub use ledger::VoteLedger;
pub use rule::{ReputationRules, VoteDeltas};
pub use votable::{Votable, VotableId};
pub use vote::VoteDirection;

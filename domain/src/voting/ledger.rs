//! Per-post vote bookkeeping
//!
//! A [`VoteLedger`] is embedded in every votable post. It remembers who voted
//! which way and refuses votes from the author and repeat votes. It knows
//! nothing about reputation; deltas are resolved by the caller.

use super::vote::VoteDirection;
use crate::core::error::VotingError;
use crate::core::id::UserId;
use crate::core::kind::PostKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Who has voted on a single post
///
/// A user appears in at most one of the two sets.
///
/// # Example
///
/// ```
/// use overboard_domain::{PostKind, UserId, VoteDirection, VoteLedger};
///
/// let author = UserId::new(0);
/// let voter = UserId::new(1);
///
/// let mut ledger = VoteLedger::default();
/// ledger.record(PostKind::Answer, author, voter, VoteDirection::Up).unwrap();
/// assert_eq!(ledger.up_votes(), 1);
///
/// // The author is never allowed to vote
/// assert!(ledger.record(PostKind::Answer, author, author, VoteDirection::Up).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteLedger {
    up_voters: BTreeSet<UserId>,
    down_voters: BTreeSet<UserId>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `voter` may vote on a post written by `author`
    ///
    /// Does not modify the ledger.
    pub fn check(&self, kind: PostKind, author: UserId, voter: UserId) -> Result<(), VotingError> {
        if voter == author {
            return Err(VotingError::SelfVote);
        }
        if let Some(previous) = self.vote_of(voter) {
            return Err(VotingError::AlreadyVoted { kind, previous });
        }
        Ok(())
    }

    /// Record a vote, or leave the ledger untouched if it is not allowed
    pub fn record(
        &mut self,
        kind: PostKind,
        author: UserId,
        voter: UserId,
        direction: VoteDirection,
    ) -> Result<(), VotingError> {
        self.check(kind, author, voter)?;
        match direction {
            VoteDirection::Up => self.up_voters.insert(voter),
            VoteDirection::Down => self.down_voters.insert(voter),
        };
        Ok(())
    }

    /// The direction `voter` voted in, if any
    pub fn vote_of(&self, voter: UserId) -> Option<VoteDirection> {
        if self.up_voters.contains(&voter) {
            Some(VoteDirection::Up)
        } else if self.down_voters.contains(&voter) {
            Some(VoteDirection::Down)
        } else {
            None
        }
    }

    pub fn up_votes(&self) -> usize {
        self.up_voters.len()
    }

    pub fn down_votes(&self) -> usize {
        self.down_voters.len()
    }

    pub fn total_votes(&self) -> usize {
        self.up_votes() + self.down_votes()
    }

    /// Up votes minus down votes
    pub fn score(&self) -> i64 {
        self.up_votes() as i64 - self.down_votes() as i64
    }

    pub fn up_voters(&self) -> impl Iterator<Item = UserId> + '_ {
        self.up_voters.iter().copied()
    }

    pub fn down_voters(&self) -> impl Iterator<Item = UserId> + '_ {
        self.down_voters.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHOR: UserId = UserId::new(0);
    const ALICE: UserId = UserId::new(1);
    const BOB: UserId = UserId::new(2);

    #[test]
    fn test_record_up_and_down() {
        let mut ledger = VoteLedger::new();
        ledger
            .record(PostKind::Question, AUTHOR, ALICE, VoteDirection::Up)
            .unwrap();
        ledger
            .record(PostKind::Question, AUTHOR, BOB, VoteDirection::Down)
            .unwrap();

        assert_eq!(ledger.up_votes(), 1);
        assert_eq!(ledger.down_votes(), 1);
        assert_eq!(ledger.total_votes(), 2);
        assert_eq!(ledger.score(), 0);
        assert_eq!(ledger.vote_of(ALICE), Some(VoteDirection::Up));
        assert_eq!(ledger.vote_of(BOB), Some(VoteDirection::Down));
        assert_eq!(ledger.vote_of(AUTHOR), None);
    }

    #[test]
    fn test_author_cannot_vote() {
        let mut ledger = VoteLedger::new();
        for direction in [VoteDirection::Up, VoteDirection::Down] {
            let result = ledger.record(PostKind::Answer, AUTHOR, AUTHOR, direction);
            assert_eq!(result, Err(VotingError::SelfVote));
        }
        assert_eq!(ledger, VoteLedger::new());
    }

    #[test]
    fn test_repeat_vote_rejected() {
        let mut ledger = VoteLedger::new();
        ledger
            .record(PostKind::Answer, AUTHOR, ALICE, VoteDirection::Up)
            .unwrap();

        let again = ledger.record(PostKind::Answer, AUTHOR, ALICE, VoteDirection::Up);
        assert_eq!(
            again,
            Err(VotingError::AlreadyVoted {
                kind: PostKind::Answer,
                previous: VoteDirection::Up
            })
        );

        // Switching sides counts as a second vote too
        let switch = ledger.record(PostKind::Answer, AUTHOR, ALICE, VoteDirection::Down);
        assert!(switch.is_err());
        assert_eq!(ledger.up_votes(), 1);
        assert_eq!(ledger.down_votes(), 0);
    }

    #[test]
    fn test_voters_iterate_in_id_order() {
        let mut ledger = VoteLedger::new();
        ledger
            .record(PostKind::Question, AUTHOR, BOB, VoteDirection::Up)
            .unwrap();
        ledger
            .record(PostKind::Question, AUTHOR, ALICE, VoteDirection::Up)
            .unwrap();

        let voters: Vec<_> = ledger.up_voters().collect();
        assert_eq!(voters, vec![ALICE, BOB]);
        assert_eq!(ledger.down_voters().count(), 0);
    }
}

//! The votable capability shared by questions and answers

use super::ledger::VoteLedger;
use super::rule::{ReputationRules, VoteDeltas};
use super::vote::VoteDirection;
use crate::core::error::VotingError;
use crate::core::id::{AnswerId, QuestionId, UserId};
use crate::core::kind::PostKind;
use serde::{Deserialize, Serialize};

/// Reference to anything that can be voted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "id")]
pub enum VotableId {
    Question(QuestionId),
    Answer(AnswerId),
}

impl VotableId {
    pub fn kind(&self) -> PostKind {
        match self {
            VotableId::Question(_) => PostKind::Question,
            VotableId::Answer(_) => PostKind::Answer,
        }
    }
}

impl From<QuestionId> for VotableId {
    fn from(id: QuestionId) -> Self {
        VotableId::Question(id)
    }
}

impl From<AnswerId> for VotableId {
    fn from(id: AnswerId) -> Self {
        VotableId::Answer(id)
    }
}

impl std::fmt::Display for VotableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VotableId::Question(id) => write!(f, "{}", id),
            VotableId::Answer(id) => write!(f, "{}", id),
        }
    }
}

/// A post that receives votes on behalf of its author.
///
/// Implementors supply identity, authorship and their own ledger; the vote
/// registration itself (author guard, bookkeeping, delta lookup) is shared.
pub trait Votable {
    fn votable_id(&self) -> VotableId;

    /// The user whose reputation votes on this post affect
    fn author(&self) -> UserId;

    fn ledger(&self) -> &VoteLedger;

    fn ledger_mut(&mut self) -> &mut VoteLedger;

    fn kind(&self) -> PostKind {
        self.votable_id().kind()
    }

    /// This post's delta constants
    fn vote_deltas(&self, rules: &ReputationRules) -> VoteDeltas {
        rules.deltas_for(self.kind())
    }

    /// Record a vote and return the delta to apply to the author
    fn register_vote(
        &mut self,
        voter: UserId,
        direction: VoteDirection,
        rules: &ReputationRules,
    ) -> Result<i64, VotingError> {
        let kind = self.kind();
        let author = self.author();
        self.ledger_mut().record(kind, author, voter, direction)?;
        Ok(self.vote_deltas(rules).for_direction(direction))
    }

    fn register_up_vote(
        &mut self,
        voter: UserId,
        rules: &ReputationRules,
    ) -> Result<i64, VotingError> {
        self.register_vote(voter, VoteDirection::Up, rules)
    }

    fn register_down_vote(
        &mut self,
        voter: UserId,
        rules: &ReputationRules,
    ) -> Result<i64, VotingError> {
        self.register_vote(voter, VoteDirection::Down, rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Post {
        author: UserId,
        ledger: VoteLedger,
    }

    impl Votable for Post {
        fn votable_id(&self) -> VotableId {
            VotableId::Answer(AnswerId::new(0))
        }

        fn author(&self) -> UserId {
            self.author
        }

        fn ledger(&self) -> &VoteLedger {
            &self.ledger
        }

        fn ledger_mut(&mut self) -> &mut VoteLedger {
            &mut self.ledger
        }
    }

    #[test]
    fn test_register_returns_delta() {
        let rules = ReputationRules::default();
        let mut post = Post {
            author: UserId::new(0),
            ledger: VoteLedger::new(),
        };

        assert_eq!(post.register_up_vote(UserId::new(1), &rules), Ok(10));
        assert_eq!(post.register_down_vote(UserId::new(2), &rules), Ok(-1));
        assert_eq!(post.ledger().total_votes(), 2);
    }

    #[test]
    fn test_register_rejects_author() {
        let rules = ReputationRules::default();
        let mut post = Post {
            author: UserId::new(0),
            ledger: VoteLedger::new(),
        };

        assert_eq!(
            post.register_up_vote(UserId::new(0), &rules),
            Err(VotingError::SelfVote)
        );
        assert_eq!(post.ledger().total_votes(), 0);
    }

    #[test]
    fn test_votable_id_conversions() {
        let id: VotableId = QuestionId::new(3).into();
        assert_eq!(id.kind(), PostKind::Question);
        assert_eq!(id.to_string(), "question-3");

        let id: VotableId = AnswerId::new(1).into();
        assert_eq!(id.kind(), PostKind::Answer);
    }
}

//! Answer entity

use crate::core::detail::Detail;
use crate::core::id::{AnswerId, QuestionId, UserId};
use crate::voting::{Votable, VotableId, VoteLedger};
use serde::{Deserialize, Serialize};

/// A posted answer to one question (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    id: AnswerId,
    author: UserId,
    question: QuestionId,
    detail: Detail,
    ledger: VoteLedger,
}

impl Answer {
    pub(crate) fn new(id: AnswerId, author: UserId, question: QuestionId, detail: Detail) -> Self {
        Self {
            id,
            author,
            question,
            detail,
            ledger: VoteLedger::new(),
        }
    }

    pub fn id(&self) -> AnswerId {
        self.id
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    /// The question this answers
    pub fn question(&self) -> QuestionId {
        self.question
    }

    pub fn detail(&self) -> &Detail {
        &self.detail
    }
}

impl Votable for Answer {
    fn votable_id(&self) -> VotableId {
        VotableId::Answer(self.id)
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

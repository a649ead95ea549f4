//! Question entity

use crate::core::detail::Detail;
use crate::core::error::AnswerAcceptanceError;
use crate::core::id::{AnswerId, QuestionId, UserId};
use crate::voting::{Votable, VotableId, VoteLedger};
use serde::{Deserialize, Serialize};

/// A posted question (Entity)
///
/// The accepted answer moves from `None` to `Some` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    author: UserId,
    detail: Detail,
    answers: Vec<AnswerId>,
    accepted_answer: Option<AnswerId>,
    ledger: VoteLedger,
}

impl Question {
    pub(crate) fn new(id: QuestionId, author: UserId, detail: Detail) -> Self {
        Self {
            id,
            author,
            detail,
            answers: Vec::new(),
            accepted_answer: None,
            ledger: VoteLedger::new(),
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn detail(&self) -> &Detail {
        &self.detail
    }

    /// Answers posted to this question, oldest first
    pub fn answers(&self) -> &[AnswerId] {
        &self.answers
    }

    pub fn accepted_answer(&self) -> Option<AnswerId> {
        self.accepted_answer
    }

    pub fn has_accepted_answer(&self) -> bool {
        self.accepted_answer.is_some()
    }

    pub(crate) fn add_answer(&mut self, answer: AnswerId) {
        self.answers.push(answer);
    }

    /// Fails if an answer was already accepted
    pub(crate) fn check_acceptable(&self) -> Result<(), AnswerAcceptanceError> {
        if self.accepted_answer.is_some() {
            return Err(AnswerAcceptanceError::AlreadyAccepted);
        }
        Ok(())
    }

    pub(crate) fn accept(&mut self, answer: AnswerId) -> Result<(), AnswerAcceptanceError> {
        self.check_acceptable()?;
        self.accepted_answer = Some(answer);
        Ok(())
    }
}

impl Votable for Question {
    fn votable_id(&self) -> VotableId {
        VotableId::Question(self.id)
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

//! The board aggregate and the per-user actor that drives it

use super::answer::Answer;
use super::question::Question;
use super::reputation::{ReputationBreakdown, ReputationChange, ReputationReason};
use super::user::User;
use crate::core::detail::Detail;
use crate::core::error::{AnswerAcceptanceError, DomainError};
use crate::core::id::{AnswerId, QuestionId, UserId};
use crate::core::kind::PostKind;
use crate::voting::{ReputationRules, Votable, VotableId, VoteDirection};

/// A question-and-answer board (Aggregate Root)
///
/// Owns every user, question and answer; entities refer to each other by id.
/// All mutation goes through [`Board::as_user`], so every action has an
/// issuing user.
///
/// # Example
///
/// ```
/// use overboard_domain::Board;
///
/// let mut board = Board::new("Java");
/// let questioner = board.create_user("questioner");
/// let answerer = board.create_user("answerer");
///
/// let question = board.as_user(questioner)?.ask_question("What is a monad?")?;
/// let answer = board.as_user(answerer)?.answer_question(question, "A burrito.")?;
///
/// board.as_user(questioner)?.up_vote(answer)?;
/// board.as_user(questioner)?.accept_answer(answer)?;
///
/// assert_eq!(board.reputation_of(answerer)?, 25);
/// # Ok::<(), overboard_domain::DomainError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    name: String,
    rules: ReputationRules,
    users: Vec<User>,
    questions: Vec<Question>,
    answers: Vec<Answer>,
}

impl Board {
    /// Create an empty board with the default reputation rules
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_rules(name, ReputationRules::default())
    }

    pub fn with_rules(name: impl Into<String>, rules: ReputationRules) -> Self {
        Self {
            name: name.into(),
            rules,
            users: Vec::new(),
            questions: Vec::new(),
            answers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &ReputationRules {
        &self.rules
    }

    /// Register a new user. Names are not required to be unique.
    pub fn create_user(&mut self, name: impl Into<String>) -> UserId {
        let id = UserId::new(self.users.len());
        self.users.push(User::new(id, name));
        id
    }

    /// Act on the board as `user`
    pub fn as_user(&mut self, user: UserId) -> Result<Actor<'_>, DomainError> {
        self.user(user)?;
        Ok(Actor { board: self, user })
    }

    // ==================== Lookups ====================

    pub fn user(&self, id: UserId) -> Result<&User, DomainError> {
        self.users.get(id.index()).ok_or(DomainError::UnknownUser(id))
    }

    pub fn question(&self, id: QuestionId) -> Result<&Question, DomainError> {
        self.questions
            .get(id.index())
            .ok_or(DomainError::UnknownQuestion(id))
    }

    pub fn answer(&self, id: AnswerId) -> Result<&Answer, DomainError> {
        self.answers
            .get(id.index())
            .ok_or(DomainError::UnknownAnswer(id))
    }

    pub fn votable(&self, id: VotableId) -> Result<&dyn Votable, DomainError> {
        match id {
            VotableId::Question(id) => Ok(self.question(id)?),
            VotableId::Answer(id) => Ok(self.answer(id)?),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Questions asked by `user`
    pub fn questions_by(&self, user: UserId) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.author() == user)
    }

    /// Answers posted to `question`, oldest first
    pub fn answers_to(&self, question: QuestionId) -> Result<Vec<&Answer>, DomainError> {
        self.question(question)?
            .answers()
            .iter()
            .map(|id| self.answer(*id))
            .collect()
    }

    /// The accepted answer of `question`, if one was accepted
    pub fn accepted_answer(&self, question: QuestionId) -> Result<Option<&Answer>, DomainError> {
        match self.question(question)?.accepted_answer() {
            Some(id) => Ok(Some(self.answer(id)?)),
            None => Ok(None),
        }
    }

    pub fn reputation_of(&self, user: UserId) -> Result<i64, DomainError> {
        Ok(self.user(user)?.reputation())
    }

    /// Recompute `user`'s reputation from the vote ledgers and accepted answers.
    ///
    /// `total` always equals the stored counter; the breakdown shows where
    /// the points came from.
    pub fn reputation_breakdown(&self, user: UserId) -> Result<ReputationBreakdown, DomainError> {
        self.user(user)?;
        let mut breakdown = ReputationBreakdown::default();

        for question in self.questions_by(user) {
            breakdown.question_up_votes += question.ledger().up_votes();
            breakdown.question_down_votes += question.ledger().down_votes();
        }
        for answer in self.answers.iter().filter(|a| a.author() == user) {
            breakdown.answer_up_votes += answer.ledger().up_votes();
            breakdown.answer_down_votes += answer.ledger().down_votes();
        }
        breakdown.accepted_answers = self
            .questions
            .iter()
            .filter_map(|q| q.accepted_answer())
            .filter_map(|id| self.answers.get(id.index()))
            .filter(|a| a.author() == user)
            .count();

        // Partial sums may leave the i64 range; the final total never does,
        // since it equals the counter, so wrapping arithmetic lands on it exactly.
        let rules = &self.rules;
        breakdown.total = [
            (breakdown.question_up_votes, rules.question.up_vote),
            (breakdown.question_down_votes, rules.question.down_vote),
            (breakdown.answer_up_votes, rules.answer.up_vote),
            (breakdown.answer_down_votes, rules.answer.down_vote),
            (breakdown.accepted_answers, rules.accepted_answer),
        ]
        .into_iter()
        .fold(0i64, |total, (count, delta)| {
            total.wrapping_add((count as i64).wrapping_mul(delta))
        });

        Ok(breakdown)
    }

    // ==================== Mutation helpers ====================

    fn user_mut(&mut self, id: UserId) -> Result<&mut User, DomainError> {
        self.users
            .get_mut(id.index())
            .ok_or(DomainError::UnknownUser(id))
    }

    fn question_mut(&mut self, id: QuestionId) -> Result<&mut Question, DomainError> {
        self.questions
            .get_mut(id.index())
            .ok_or(DomainError::UnknownQuestion(id))
    }

    fn votable_mut(&mut self, id: VotableId) -> Result<&mut dyn Votable, DomainError> {
        match id {
            VotableId::Question(id) => Ok(self.question_mut(id)?),
            VotableId::Answer(id) => self
                .answers
                .get_mut(id.index())
                .map(|a| a as &mut dyn Votable)
                .ok_or(DomainError::UnknownAnswer(id)),
        }
    }

    /// Fail if crediting `delta` to `user` would overflow their reputation
    fn check_credit(&self, user: UserId, delta: i64) -> Result<(), DomainError> {
        match self.user(user)?.reputation_after(delta) {
            Some(_) => Ok(()),
            None => Err(DomainError::ReputationOverflow { user, delta }),
        }
    }

    fn credit(
        &mut self,
        user: UserId,
        delta: i64,
        reason: ReputationReason,
    ) -> Result<ReputationChange, DomainError> {
        let reputation = self
            .user_mut(user)?
            .adjust_reputation(delta)
            .ok_or(DomainError::ReputationOverflow { user, delta })?;
        Ok(ReputationChange {
            user,
            delta,
            reason,
            reputation,
        })
    }
}

/// A user acting on a board
///
/// Obtained from [`Board::as_user`]. Every operation either applies fully or
/// returns an error with the board untouched.
#[derive(Debug)]
pub struct Actor<'a> {
    board: &'a mut Board,
    user: UserId,
}

impl Actor<'_> {
    pub fn id(&self) -> UserId {
        self.user
    }

    pub fn name(&self) -> &str {
        self.board.users[self.user.index()].name()
    }

    pub fn reputation(&self) -> i64 {
        self.board.users[self.user.index()].reputation()
    }

    /// Post a new question
    pub fn ask_question(&mut self, detail: impl Into<String>) -> Result<QuestionId, DomainError> {
        let detail = Detail::try_new(PostKind::Question, detail)?;
        let id = QuestionId::new(self.board.questions.len());
        self.board
            .questions
            .push(Question::new(id, self.user, detail));
        Ok(id)
    }

    /// Post an answer to `question`
    pub fn answer_question(
        &mut self,
        question: QuestionId,
        detail: impl Into<String>,
    ) -> Result<AnswerId, DomainError> {
        self.board.question(question)?;
        let detail = Detail::try_new(PostKind::Answer, detail)?;
        let id = AnswerId::new(self.board.answers.len());
        self.board
            .answers
            .push(Answer::new(id, self.user, question, detail));
        self.board.question_mut(question)?.add_answer(id);
        Ok(id)
    }

    pub fn up_vote(
        &mut self,
        target: impl Into<VotableId>,
    ) -> Result<ReputationChange, DomainError> {
        self.vote(target.into(), VoteDirection::Up)
    }

    pub fn down_vote(
        &mut self,
        target: impl Into<VotableId>,
    ) -> Result<ReputationChange, DomainError> {
        self.vote(target.into(), VoteDirection::Down)
    }

    /// Vote on a question or answer; the author's reputation moves, never the voter's
    pub fn vote(
        &mut self,
        target: VotableId,
        direction: VoteDirection,
    ) -> Result<ReputationChange, DomainError> {
        let rules = self.board.rules;
        let (author, delta) = {
            let votable = self.board.votable(target)?;
            votable
                .ledger()
                .check(votable.kind(), votable.author(), self.user)?;
            let delta = votable.vote_deltas(&rules).for_direction(direction);
            (votable.author(), delta)
        };
        self.board.check_credit(author, delta)?;

        let delta = self
            .board
            .votable_mut(target)?
            .register_vote(self.user, direction, &rules)?;
        self.board.credit(
            author,
            delta,
            ReputationReason::for_vote(target.kind(), direction),
        )
    }

    /// Accept `answer` for the question it answers. Only the questioner may.
    pub fn accept_answer(&mut self, answer: AnswerId) -> Result<ReputationChange, DomainError> {
        let (question, answerer) = {
            let answer = self.board.answer(answer)?;
            (answer.question(), answer.author())
        };

        let questioner = self.board.question(question)?.author();
        if questioner != self.user {
            let questioner = self.board.user(questioner)?.name().to_string();
            return Err(AnswerAcceptanceError::NotQuestioner { questioner }.into());
        }

        self.board.question(question)?.check_acceptable()?;
        let delta = self.board.rules.accepted_answer;
        self.board.check_credit(answerer, delta)?;

        self.board.question_mut(question)?.accept(answer)?;
        self.board
            .credit(answerer, delta, ReputationReason::AnswerAccepted)
    }
}

//! Apply Activity use case.
//!
//! Applies [`BoardCommand`]s (ask, answer, vote, accept) to a [`Board`] on
//! behalf of the issuing user, logs the outcome and notifies the
//! [`ReputationObserver`] of reputation changes and rejections.
//!
//! Each command is atomic: a rejected command leaves the board untouched, and
//! later commands in a batch still run.

use crate::ports::reputation_observer::{NoReputationObserver, ReputationObserver};
use overboard_domain::{
    AnswerId, Board, DomainError, QuestionId, ReputationChange, UserId, VotableId, VoteDirection,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// An action a user performs on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardCommand {
    AskQuestion {
        author: UserId,
        detail: String,
    },
    AnswerQuestion {
        author: UserId,
        question: QuestionId,
        detail: String,
    },
    Vote {
        voter: UserId,
        target: VotableId,
        direction: VoteDirection,
    },
    AcceptAnswer {
        questioner: UserId,
        answer: AnswerId,
    },
}

impl BoardCommand {
    pub fn ask(author: UserId, detail: impl Into<String>) -> Self {
        BoardCommand::AskQuestion {
            author,
            detail: detail.into(),
        }
    }

    pub fn answer(author: UserId, question: QuestionId, detail: impl Into<String>) -> Self {
        BoardCommand::AnswerQuestion {
            author,
            question,
            detail: detail.into(),
        }
    }

    pub fn up_vote(voter: UserId, target: impl Into<VotableId>) -> Self {
        BoardCommand::Vote {
            voter,
            target: target.into(),
            direction: VoteDirection::Up,
        }
    }

    pub fn down_vote(voter: UserId, target: impl Into<VotableId>) -> Self {
        BoardCommand::Vote {
            voter,
            target: target.into(),
            direction: VoteDirection::Down,
        }
    }

    pub fn accept(questioner: UserId, answer: AnswerId) -> Self {
        BoardCommand::AcceptAnswer { questioner, answer }
    }

    /// The user issuing this command
    pub fn actor(&self) -> UserId {
        match self {
            BoardCommand::AskQuestion { author, .. } => *author,
            BoardCommand::AnswerQuestion { author, .. } => *author,
            BoardCommand::Vote { voter, .. } => *voter,
            BoardCommand::AcceptAnswer { questioner, .. } => *questioner,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BoardCommand::AskQuestion { .. } => "ask_question",
            BoardCommand::AnswerQuestion { .. } => "answer_question",
            BoardCommand::Vote {
                direction: VoteDirection::Up,
                ..
            } => "up_vote",
            BoardCommand::Vote {
                direction: VoteDirection::Down,
                ..
            } => "down_vote",
            BoardCommand::AcceptAnswer { .. } => "accept_answer",
        }
    }
}

/// Result of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    QuestionPosted(QuestionId),
    AnswerPosted(AnswerId),
    ReputationChanged(ReputationChange),
}

impl CommandOutcome {
    pub fn reputation_change(&self) -> Option<&ReputationChange> {
        match self {
            CommandOutcome::ReputationChanged(change) => Some(change),
            _ => None,
        }
    }
}

/// Outcome of [`ApplyActivityUseCase::execute_all`], one entry per command
/// in input order.
#[derive(Debug, Default)]
pub struct ActivitySummary {
    pub outcomes: Vec<Result<CommandOutcome, DomainError>>,
}

impl ActivitySummary {
    pub fn applied(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.applied()
    }

    /// Whether every command was applied
    pub fn is_clean(&self) -> bool {
        self.rejected() == 0
    }

    /// Errors of rejected commands
    pub fn errors(&self) -> impl Iterator<Item = &DomainError> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }

    /// Net reputation delta per affected user, across all applied commands
    pub fn net_delta(&self, user: UserId) -> i64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.as_ref().ok())
            .filter_map(CommandOutcome::reputation_change)
            .filter(|c| c.user == user)
            .map(|c| c.delta)
            .sum()
    }
}

/// Use case for applying user activity to a board.
#[derive(Clone)]
pub struct ApplyActivityUseCase {
    observer: Arc<dyn ReputationObserver>,
}

impl Default for ApplyActivityUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplyActivityUseCase {
    pub fn new() -> Self {
        Self {
            observer: Arc::new(NoReputationObserver),
        }
    }

    /// Create with a reputation observer.
    pub fn with_observer(mut self, observer: Arc<dyn ReputationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Apply a single command.
    pub fn execute(
        &self,
        board: &mut Board,
        command: BoardCommand,
    ) -> Result<CommandOutcome, DomainError> {
        let actor = command.actor();
        debug!("Applying {} by {} on board {}", command.as_str(), actor, board.name());

        match Self::apply(board, &command) {
            Ok(outcome) => {
                info!("{} by {} applied", command.as_str(), actor);
                if let Some(change) = outcome.reputation_change() {
                    debug!(
                        user = %change.user,
                        delta = change.delta,
                        reason = %change.reason,
                        reputation = change.reputation,
                        "Reputation changed"
                    );
                    self.observer.on_reputation_changed(change);
                }
                Ok(outcome)
            }
            Err(e) => {
                warn!("{} by {} rejected: {}", command.as_str(), actor, e);
                self.observer.on_command_rejected(actor, &e);
                Err(e)
            }
        }
    }

    /// Apply commands in order, continuing past rejected ones.
    pub fn execute_all(
        &self,
        board: &mut Board,
        commands: impl IntoIterator<Item = BoardCommand>,
    ) -> ActivitySummary {
        let outcomes = commands
            .into_iter()
            .map(|command| self.execute(board, command))
            .collect::<Vec<_>>();
        let summary = ActivitySummary { outcomes };

        info!(
            "Applied {} of {} commands on board {}",
            summary.applied(),
            summary.outcomes.len(),
            board.name()
        );
        summary
    }

    fn apply(board: &mut Board, command: &BoardCommand) -> Result<CommandOutcome, DomainError> {
        let mut actor = board.as_user(command.actor())?;
        match command {
            BoardCommand::AskQuestion { detail, .. } => actor
                .ask_question(detail.as_str())
                .map(CommandOutcome::QuestionPosted),
            BoardCommand::AnswerQuestion {
                question, detail, ..
            } => actor
                .answer_question(*question, detail.as_str())
                .map(CommandOutcome::AnswerPosted),
            BoardCommand::Vote {
                target, direction, ..
            } => actor
                .vote(*target, *direction)
                .map(CommandOutcome::ReputationChanged),
            BoardCommand::AcceptAnswer { answer, .. } => actor
                .accept_answer(*answer)
                .map(CommandOutcome::ReputationChanged),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use overboard_domain::{ReputationReason, VotingError};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        changes: Mutex<Vec<ReputationChange>>,
        rejections: Mutex<Vec<(UserId, String)>>,
    }

    impl ReputationObserver for RecordingObserver {
        fn on_reputation_changed(&self, change: &ReputationChange) {
            self.changes.lock().unwrap().push(*change);
        }

        fn on_command_rejected(&self, actor: UserId, error: &DomainError) {
            self.rejections
                .lock()
                .unwrap()
                .push((actor, error.to_string()));
        }
    }

    struct Setup {
        board: Board,
        user: UserId,
        questioner: UserId,
        answerer: UserId,
    }

    fn setup() -> Setup {
        let mut board = BoardConfig::new("Java").open();
        let user = board.create_user("user");
        let questioner = board.create_user("questioner");
        let answerer = board.create_user("answerer");
        Setup {
            board,
            user,
            questioner,
            answerer,
        }
    }

    #[test]
    fn test_full_scenario() {
        let mut s = setup();
        let observer = Arc::new(RecordingObserver::default());
        let use_case = ApplyActivityUseCase::new().with_observer(observer.clone());

        let question = match use_case
            .execute(&mut s.board, BoardCommand::ask(s.questioner, "New question"))
            .unwrap()
        {
            CommandOutcome::QuestionPosted(id) => id,
            other => panic!("unexpected outcome: {:?}", other),
        };
        let answer = match use_case
            .execute(
                &mut s.board,
                BoardCommand::answer(s.answerer, question, "New answer"),
            )
            .unwrap()
        {
            CommandOutcome::AnswerPosted(id) => id,
            other => panic!("unexpected outcome: {:?}", other),
        };

        let summary = use_case.execute_all(
            &mut s.board,
            vec![
                BoardCommand::up_vote(s.user, question),
                BoardCommand::up_vote(s.user, answer),
                BoardCommand::accept(s.questioner, answer),
            ],
        );

        assert!(summary.is_clean());
        assert_eq!(summary.net_delta(s.questioner), 5);
        assert_eq!(summary.net_delta(s.answerer), 25);
        assert_eq!(s.board.reputation_of(s.questioner).unwrap(), 5);
        assert_eq!(s.board.reputation_of(s.answerer).unwrap(), 25);

        let changes = observer.changes.lock().unwrap();
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[2].reason, ReputationReason::AnswerAccepted);
        assert_eq!(changes[2].reputation, 25);
    }

    #[test]
    fn test_rejections_are_reported_and_skipped() {
        let mut s = setup();
        let observer = Arc::new(RecordingObserver::default());
        let use_case = ApplyActivityUseCase::new().with_observer(observer.clone());
        let question = s
            .board
            .as_user(s.questioner)
            .unwrap()
            .ask_question("New question")
            .unwrap();
        let answer = s
            .board
            .as_user(s.answerer)
            .unwrap()
            .answer_question(question, "New answer")
            .unwrap();

        let summary = use_case.execute_all(
            &mut s.board,
            vec![
                BoardCommand::up_vote(s.questioner, question),
                BoardCommand::accept(s.user, answer),
                BoardCommand::down_vote(s.user, answer),
                BoardCommand::ask(s.user, ""),
            ],
        );

        assert_eq!(summary.applied(), 1);
        assert_eq!(summary.rejected(), 3);
        assert_eq!(
            summary.outcomes[0].as_ref().unwrap_err(),
            &DomainError::Voting(VotingError::SelfVote)
        );
        assert!(summary.errors().any(|e| e.is_acceptance_error()));
        assert!(summary.errors().any(|e| e.is_validation_error()));
        assert_eq!(s.board.reputation_of(s.answerer).unwrap(), -1);
        assert_eq!(s.board.reputation_of(s.questioner).unwrap(), 0);

        let rejections = observer.rejections.lock().unwrap();
        assert_eq!(rejections.len(), 3);
        assert_eq!(
            rejections[1],
            (
                s.user,
                "Only questioner can accept this answer as it is their question".to_string()
            )
        );
    }

    #[test]
    fn test_unknown_actor_rejected() {
        let mut s = setup();
        let use_case = ApplyActivityUseCase::default();
        let err = use_case
            .execute(&mut s.board, BoardCommand::ask(UserId::new(42), "Hi?"))
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownUser(UserId::new(42)));
        assert!(s.board.questions().is_empty());
    }

    #[test]
    fn test_command_metadata() {
        let voter = UserId::new(1);
        let command = BoardCommand::down_vote(voter, AnswerId::new(0));
        assert_eq!(command.actor(), voter);
        assert_eq!(command.as_str(), "down_vote");
        assert_eq!(
            BoardCommand::accept(UserId::new(2), AnswerId::new(0)).as_str(),
            "accept_answer"
        );
    }
}

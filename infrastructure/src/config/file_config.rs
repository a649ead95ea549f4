//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field is optional in the file; missing values fall back to the
//! built-in defaults when converted to application types.

use overboard_application::{BoardConfig, DEFAULT_BOARD_NAME};
use overboard_domain::{ReputationRules, VoteDeltas};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("board name cannot be empty")]
    EmptyBoardName,
}

/// Raw board configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBoardConfig {
    /// Display name of the board
    pub name: String,
}

impl Default for FileBoardConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_BOARD_NAME.to_string(),
        }
    }
}

/// Raw vote deltas for one kind of post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVoteDeltas {
    pub up_vote: Option<i64>,
    pub down_vote: Option<i64>,
}

impl FileVoteDeltas {
    fn resolve(&self, fallback: VoteDeltas) -> VoteDeltas {
        VoteDeltas::new(
            self.up_vote.unwrap_or(fallback.up_vote),
            self.down_vote.unwrap_or(fallback.down_vote),
        )
    }
}

/// Raw reputation configuration from TOML
///
/// ```toml
/// [reputation]
/// accepted_answer = 15
///
/// [reputation.question]
/// up_vote = 5
/// down_vote = 0
///
/// [reputation.answer]
/// up_vote = 10
/// down_vote = -1
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReputationConfig {
    pub question: FileVoteDeltas,
    pub answer: FileVoteDeltas,
    pub accepted_answer: Option<i64>,
}

impl FileReputationConfig {
    /// Resolve against the default point table
    pub fn to_rules(&self) -> ReputationRules {
        let defaults = ReputationRules::default();
        ReputationRules {
            question: self.question.resolve(defaults.question),
            answer: self.answer.resolve(defaults.answer),
            accepted_answer: self.accepted_answer.unwrap_or(defaults.accepted_answer),
        }
    }

    /// Fully populated form of `rules`
    pub fn from_rules(rules: &ReputationRules) -> Self {
        Self {
            question: FileVoteDeltas {
                up_vote: Some(rules.question.up_vote),
                down_vote: Some(rules.question.down_vote),
            },
            answer: FileVoteDeltas {
                up_vote: Some(rules.answer.up_vote),
                down_vote: Some(rules.answer.down_vote),
            },
            accepted_answer: Some(rules.accepted_answer),
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// 0 = warn, 1 = info, 2 = debug, 3+ = trace
    pub verbosity: u8,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub board: FileBoardConfig,
    pub reputation: FileReputationConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.board.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBoardName);
        }
        Ok(())
    }

    /// Convert to the application-level board configuration
    pub fn to_board_config(&self) -> BoardConfig {
        BoardConfig::new(self.board.name.clone()).with_rules(self.reputation.to_rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[board]
name = "Java"

[reputation]
accepted_answer = 20

[reputation.question]
up_vote = 3
down_vote = -1

[reputation.answer]
up_vote = 8
down_vote = -2

[logging]
verbosity = 2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let rules = config.reputation.to_rules();
        assert_eq!(config.board.name, "Java");
        assert_eq!(rules.question, VoteDeltas::new(3, -1));
        assert_eq!(rules.answer, VoteDeltas::new(8, -2));
        assert_eq!(rules.accepted_answer, 20);
        assert_eq!(config.logging.verbosity, 2);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[reputation.answer]
down_vote = -5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let rules = config.reputation.to_rules();
        // Defaults should apply
        assert_eq!(config.board.name, "Overboard");
        assert_eq!(rules.answer, VoteDeltas::new(10, -5));
        assert_eq!(rules.question, VoteDeltas::new(5, 0));
        assert_eq!(rules.accepted_answer, 15);
        assert_eq!(config.logging.verbosity, 0);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.to_board_config(), BoardConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_board_name() {
        let toml_str = r#"
[board]
name = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyBoardName)
        ));
    }

    #[test]
    fn test_from_rules_is_fully_populated() {
        let raw = FileReputationConfig::from_rules(&ReputationRules::default());
        assert_eq!(raw.question.down_vote, Some(0));
        assert_eq!(raw.answer.down_vote, Some(-1));
        assert_eq!(raw.accepted_answer, Some(15));
    }
}

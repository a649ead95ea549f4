//! Post kind shared by questions and answers

use serde::{Deserialize, Serialize};

/// The two kinds of post on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Question,
    Answer,
}

impl PostKind {
    pub fn as_str(&self) -> &str {
        match self {
            PostKind::Question => "question",
            PostKind::Answer => "answer",
        }
    }

    /// Capitalized form for the start of a sentence
    pub fn title(&self) -> &str {
        match self {
            PostKind::Question => "Question",
            PostKind::Answer => "Answer",
        }
    }
}

impl std::fmt::Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Vote primitives

use serde::{Deserialize, Serialize};

/// Direction of a single vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Past-tense verb, e.g. "upvoted"
    pub fn past_tense(&self) -> &str {
        match self {
            VoteDirection::Up => "upvoted",
            VoteDirection::Down => "downvoted",
        }
    }
}

impl std::fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.past_tense())
    }
}

impl std::str::FromStr for VoteDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" | "upvote" | "upvoted" => Ok(VoteDirection::Up),
            "down" | "downvote" | "downvoted" => Ok(VoteDirection::Down),
            _ => Err(format!("Unknown vote direction: {}. Valid: up, down", s)),
        }
    }
}

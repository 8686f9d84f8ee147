//! Round outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a round from the table's point of view: who won, or a draw
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    User,
    Computer,
    Draw,
}

impl Outcome {
    /// Label used in the outcome table
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::User => "user",
            Outcome::Computer => "computer",
            Outcome::Draw => "draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_str() {
        assert_eq!(Outcome::User.as_str(), "user");
        assert_eq!(Outcome::Computer.as_str(), "computer");
        assert_eq!(Outcome::Draw.as_str(), "draw");
    }
}

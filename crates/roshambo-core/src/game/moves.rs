//! Move set validation and the circular dominance rule.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

use super::Outcome;

/// Errors from building or querying a move set
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MoveSetError {
    #[error("expected an odd number of moves, at least 3, got {0}")]
    BadCount(usize),

    #[error("duplicate move: {0}")]
    DuplicateMove(String),

    #[error("unknown move: {0}")]
    UnknownMove(String),
}

/// Ordered, distinct move names. The order is the dominance ring: every
/// move loses to the `len / 2` moves that follow it in the ring and
/// beats the `len / 2` moves behind it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate and build a move set.
    ///
    /// The count must be odd and at least 3, and every name must be
    /// distinct (case-sensitive). Checked in that order.
    pub fn new(moves: Vec<String>) -> Result<Self, MoveSetError> {
        let count = moves.len();
        if count < 3 || count % 2 == 0 {
            return Err(MoveSetError::BadCount(count));
        }
        let mut seen = HashSet::new();
        for name in &moves {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::DuplicateMove(name.clone()));
            }
        }
        Ok(Self(moves))
    }

    /// Number of moves in the ring
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a valid set holds at least three moves
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Move names in ring order
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Move name at `index` in ring order
    pub fn name(&self, index: usize) -> &str {
        &self.0[index]
    }

    /// Position of `name` in the ring, if it is a member
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|m| m == name)
    }

    /// Decide a round under the circular dominance rule.
    ///
    /// A move outside the set is a caller error and fails with
    /// [`MoveSetError::UnknownMove`] instead of producing a bogus result.
    pub fn resolve(&self, computer: &str, user: &str) -> Result<Outcome, MoveSetError> {
        let ic = self
            .index_of(computer)
            .ok_or_else(|| MoveSetError::UnknownMove(computer.to_owned()))?;
        let iu = self
            .index_of(user)
            .ok_or_else(|| MoveSetError::UnknownMove(user.to_owned()))?;

        if iu == ic {
            return Ok(Outcome::Draw);
        }

        let n = self.0.len();
        let half = n / 2;
        if iu + half <= n - 1 {
            // the next `half` moves in the ring beat the user's move
            if ic > iu && ic <= iu + half {
                Ok(Outcome::Computer)
            } else {
                Ok(Outcome::User)
            }
        } else {
            // forward window wraps; for odd n this implies iu > half, so
            // the backward window always fits
            debug_assert!(iu >= half);
            if ic < iu && ic >= iu - half {
                Ok(Outcome::User)
            } else {
                Ok(Outcome::Computer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_set(names: &[&str]) -> MoveSet {
        MoveSet::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_rejects_even_count() {
        let err = MoveSet::new(vec!["a".into(), "b".into()]).unwrap_err();
        assert_eq!(err, MoveSetError::BadCount(2));
    }

    #[test]
    fn test_rejects_too_few_moves() {
        let err = MoveSet::new(vec!["a".into()]).unwrap_err();
        assert_eq!(err, MoveSetError::BadCount(1));
    }

    #[test]
    fn test_rejects_duplicate_move() {
        let err = MoveSet::new(vec!["a".into(), "b".into(), "b".into()]).unwrap_err();
        assert_eq!(err, MoveSetError::DuplicateMove("b".into()));
    }

    #[test]
    fn test_duplicates_are_case_sensitive() {
        // "Rock" and "rock" are different moves
        let moves = MoveSet::new(vec!["Rock".into(), "rock".into(), "paper".into()]);
        assert!(moves.is_ok());
    }

    #[test]
    fn test_accepts_classic_triple() {
        let moves = move_set(&["rock", "paper", "scissors"]);
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.index_of("paper"), Some(1));
        assert_eq!(moves.index_of("lizard"), None);
    }

    #[test]
    fn test_unknown_move_fails_loudly() {
        let moves = move_set(&["rock", "paper", "scissors"]);
        let err = moves.resolve("rock", "lizard").unwrap_err();
        assert_eq!(err, MoveSetError::UnknownMove("lizard".into()));
    }

    #[test]
    fn test_same_move_is_draw() {
        let moves = move_set(&["rock", "paper", "scissors"]);
        for name in moves.names() {
            assert_eq!(moves.resolve(name, name).unwrap(), Outcome::Draw);
        }
    }

    #[test]
    fn test_classic_rock_paper_scissors() {
        let moves = move_set(&["rock", "paper", "scissors"]);

        // rock beats scissors
        assert_eq!(moves.resolve("scissors", "rock").unwrap(), Outcome::User);
        assert_eq!(moves.resolve("rock", "scissors").unwrap(), Outcome::Computer);
        // paper beats rock
        assert_eq!(moves.resolve("rock", "paper").unwrap(), Outcome::User);
        assert_eq!(moves.resolve("paper", "rock").unwrap(), Outcome::Computer);
        // scissors beats paper
        assert_eq!(moves.resolve("paper", "scissors").unwrap(), Outcome::User);
        assert_eq!(moves.resolve("scissors", "paper").unwrap(), Outcome::Computer);
    }

    #[test]
    fn test_five_move_ring() {
        let moves = move_set(&["rock", "paper", "scissors", "lizard", "spock"]);

        // paper beats rock, two steps still beat it, three do not
        assert_eq!(moves.resolve("paper", "rock").unwrap(), Outcome::Computer);
        assert_eq!(moves.resolve("scissors", "rock").unwrap(), Outcome::Computer);
        assert_eq!(moves.resolve("lizard", "rock").unwrap(), Outcome::User);
        assert_eq!(moves.resolve("spock", "rock").unwrap(), Outcome::User);
        // wraparound: spock loses to the two moves after it in the ring
        assert_eq!(moves.resolve("rock", "spock").unwrap(), Outcome::Computer);
        assert_eq!(moves.resolve("paper", "spock").unwrap(), Outcome::Computer);
        assert_eq!(moves.resolve("scissors", "spock").unwrap(), Outcome::User);
    }

    #[test]
    fn test_exactly_one_winner_and_antisymmetry() {
        for n in [3usize, 5, 7, 9, 11] {
            let names: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
            let moves = MoveSet::new(names).unwrap();
            for i in 0..n {
                for j in 0..n {
                    let forward = moves.resolve(moves.name(i), moves.name(j)).unwrap();
                    let backward = moves.resolve(moves.name(j), moves.name(i)).unwrap();
                    if i == j {
                        assert_eq!(forward, Outcome::Draw);
                    } else {
                        assert_ne!(forward, Outcome::Draw, "n={n} i={i} j={j}");
                        match forward {
                            Outcome::Computer => assert_eq!(backward, Outcome::User),
                            Outcome::User => assert_eq!(backward, Outcome::Computer),
                            Outcome::Draw => unreachable!(),
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_move_beats_exactly_half() {
        for n in [3usize, 5, 7, 9, 11] {
            let names: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
            let moves = MoveSet::new(names).unwrap();
            for user in 0..n {
                let wins = (0..n)
                    .filter(|&computer| {
                        moves.resolve(moves.name(computer), moves.name(user)).unwrap()
                            == Outcome::User
                    })
                    .count();
                assert_eq!(wins, n / 2, "n={n} user={user}");
            }
        }
    }
}

//! One committed game round.

use crate::crypto::{uniform_int, Commitment, RandomSourceError, SecretKey};

use super::{MoveSet, MoveSetError, Outcome};

/// A single round against the computer.
///
/// The computer's move, the secret key, and the commitment are fixed
/// when the round opens and never change afterwards; once the
/// commitment has been shown, regenerating any of them would void the
/// fairness guarantee. `reveal` consumes the round, ending it.
pub struct Round<'a> {
    moves: &'a MoveSet,
    computer: &'a str,
    secret: SecretKey,
    commitment: Commitment,
}

impl<'a> Round<'a> {
    /// Pick the computer's move uniformly at random and commit to it
    pub fn open(moves: &'a MoveSet) -> Result<Self, RandomSourceError> {
        let pick = uniform_int(0, moves.len() as u32 - 1)? as usize;
        let computer = moves.name(pick);
        let secret = SecretKey::random()?;
        let commitment = Commitment::commit(&secret, computer);
        Ok(Self {
            moves,
            computer,
            secret,
            commitment,
        })
    }

    /// Commitment to show the user before they pick
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The committed computer move
    pub fn computer_move(&self) -> &'a str {
        self.computer
    }

    /// Decide the round against the user's move
    pub fn outcome(&self, user: &str) -> Result<Outcome, MoveSetError> {
        self.moves.resolve(self.computer, user)
    }

    /// End the round, disclosing the key so the user can recompute the
    /// commitment on their own
    pub fn reveal(self) -> SecretKey {
        self.secret
    }
}

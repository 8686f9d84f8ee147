//! Roshambo Core Library
//!
//! This crate provides the commitment crypto and game logic for the
//! provably fair console game: the computer commits to its move before
//! the user picks, and reveals the key afterwards so the user can check
//! that the move never changed.

pub mod crypto;
pub mod game;

pub use crypto::{Commitment, RandomSourceError, SecretKey};
pub use game::{MoveSet, MoveSetError, Outcome, OutcomeMatrix, Round};

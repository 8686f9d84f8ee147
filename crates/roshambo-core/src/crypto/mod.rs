//! Cryptographic primitives for the fairness scheme.
//!
//! This module provides:
//! - SecretKey and Commitment for the commit-reveal round
//! - OS-backed random bytes and unbiased integer draws

mod commitment;
mod random;

pub use commitment::{Commitment, SecretKey};
pub use random::{random_bytes, uniform_int, RandomSourceError};

//! OS-backed randomness for key material and move selection.

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// The operating system entropy source failed.
///
/// Without OS randomness the commitment gives no fairness guarantee, so
/// callers must treat this as fatal rather than retry.
#[derive(Debug, Error)]
#[error("OS random source unavailable: {0}")]
pub struct RandomSourceError(#[from] rand::Error);

/// Fill a fixed-size array with cryptographically secure random bytes.
pub fn random_bytes<const N: usize>() -> Result<[u8; N], RandomSourceError> {
    let mut bytes = [0u8; N];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Draw a uniform integer in `[min, max]` (both inclusive).
///
/// Rejection sampling over a 32-bit OS draw: values at or above the
/// largest multiple of the range size are redrawn, so the result carries
/// no modulo bias.
pub fn uniform_int(min: u32, max: u32) -> Result<u32, RandomSourceError> {
    assert!(min <= max, "uniform_int called with an empty range");
    let span = u64::from(max - min) + 1;
    let zone = (1u64 << 32) / span * span;
    loop {
        let raw = u64::from(u32::from_le_bytes(random_bytes::<4>()?));
        if raw < zone {
            return Ok(min + (raw % span) as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_are_distinct() {
        let a: [u8; 16] = random_bytes().unwrap();
        let b: [u8; 16] = random_bytes().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_uniform_int_respects_bounds() {
        for _ in 0..1000 {
            let value = uniform_int(10, 20).unwrap();
            assert!((10..=20).contains(&value));
        }
    }

    #[test]
    fn test_uniform_int_degenerate_range() {
        assert_eq!(uniform_int(7, 7).unwrap(), 7);
    }

    #[test]
    fn test_uniform_int_covers_small_range() {
        let mut seen = [false; 5];
        for _ in 0..1000 {
            seen[uniform_int(0, 4).unwrap() as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn test_uniform_int_full_width_range() {
        // span covers the whole 32-bit draw, nothing gets rejected
        let _ = uniform_int(0, u32::MAX).unwrap();
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn test_uniform_int_rejects_inverted_range() {
        let _ = uniform_int(5, 4);
    }
}

//! OS-backed randomness.
//!
//! Every function here draws from `OsRng` (the operating system CSPRNG via
//! `getrandom`). The `*_with` variants accept any [`CryptoRng`] so callers
//! and tests can supply their own source.
//!
//! A failed entropy read is reported as [`CryptoError::RandomUnavailable`],
//! never papered over with a weaker generator.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::CryptoError;

/// Fill `dest` with bytes from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`CryptoError::RandomUnavailable`] if the entropy source cannot be read.
pub fn fill(dest: &mut [u8]) -> Result<(), CryptoError> {
    fill_with(&mut OsRng, dest)
}

/// Return `len` bytes from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`CryptoError::RandomUnavailable`] if the entropy source cannot be read.
pub fn bytes(len: usize) -> Result<Vec<u8>, CryptoError> {
    let mut out = vec![0u8; len];
    fill(&mut out)?;
    Ok(out)
}

/// Return an integer uniformly distributed in `[0, bound)` from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidParameters`] if `bound` is 0, or
/// [`CryptoError::RandomUnavailable`] if the entropy source cannot be read.
pub fn uniform_index(bound: usize) -> Result<usize, CryptoError> {
    uniform_index_with(&mut OsRng, bound)
}

/// Fill `dest` from `rng`, mapping failures to [`CryptoError::RandomUnavailable`].
///
/// # Errors
///
/// Returns [`CryptoError::RandomUnavailable`] if `rng` fails.
pub fn fill_with<R: RngCore + CryptoRng>(rng: &mut R, dest: &mut [u8]) -> Result<(), CryptoError> {
    let len = dest.len();
    rng.try_fill_bytes(dest).map_err(|e| {
        tracing::error!(len, "entropy source failed: {e}");
        CryptoError::RandomUnavailable(format!("CSPRNG fill failed: {e}"))
    })
}

/// Unbiased integer in `[0, bound)` drawn from `rng`.
///
/// Draws 64-bit words and rejects those below `2^64 mod bound`, so the
/// accepted range is an exact multiple of `bound` and the final modulo
/// favours no residue.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidParameters`] if `bound` is 0, or
/// [`CryptoError::RandomUnavailable`] if `rng` fails.
pub fn uniform_index_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    bound: usize,
) -> Result<usize, CryptoError> {
    let bound = u64::try_from(bound)
        .map_err(|_| CryptoError::InvalidParameters(format!("bound {bound} exceeds 64 bits")))?;

    // 2^64 mod bound == (2^64 - bound) mod bound.
    let Some(threshold) = bound.wrapping_neg().checked_rem(bound) else {
        return Err(CryptoError::InvalidParameters(
            "uniform index bound must be > 0".into(),
        ));
    };

    let mut word = [0u8; 8];
    loop {
        fill_with(rng, &mut word)?;
        let candidate = u64::from_le_bytes(word);
        if candidate >= threshold {
            // bound is non-zero, checked above.
            #[allow(clippy::arithmetic_side_effects)]
            let index = candidate % bound;
            return usize::try_from(index).map_err(|_| {
                CryptoError::InvalidParameters(format!("index {index} exceeds usize"))
            });
        }
    }
}

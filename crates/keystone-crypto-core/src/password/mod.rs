//! Salt, random byte and password generation.
//!
//! - [`generate_salt`]: fresh 32-byte salt for [`crate::kdf::derive_key`]
//! - [`generate_random_bytes`]: general-purpose random bytes (nonces, tokens)
//! - [`generate_password`]: human-typable password over a caller-chosen alphabet
//!
//! All randomness comes from `OsRng` through [`crate::random`].

pub mod charset;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::CryptoError;
use crate::random;

/// Salt length in bytes.
pub const SALT_LEN: usize = 32;

/// Minimum number of distinct characters a password alphabet must contain.
pub const MIN_DISTINCT_CHARS: usize = 2;

/// Generate a fresh random salt.
///
/// # Errors
///
/// Returns [`CryptoError::RandomUnavailable`] if the entropy source cannot be read.
pub fn generate_salt() -> Result<[u8; SALT_LEN], CryptoError> {
    let mut salt = [0u8; SALT_LEN];
    random::fill(&mut salt)?;
    Ok(salt)
}

/// Generate `len` random bytes.
///
/// # Errors
///
/// Returns [`CryptoError::RandomUnavailable`] if the entropy source cannot be read.
pub fn generate_random_bytes(len: usize) -> Result<Vec<u8>, CryptoError> {
    random::bytes(len)
}

/// The default password alphabet: the 95 printable ASCII characters
/// `0x20..=0x7E` in ascending order.
#[must_use]
pub fn default_password_charset() -> &'static [u8] {
    &charset::DEFAULT_PASSWORD_CHARSET
}

/// Generate a password of `length` characters drawn from `charset`.
///
/// Each position is an independent, unbiased draw over the entries of
/// `charset`. An alphabet that repeats a character gives it proportionally
/// more weight.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidCharacterSet`] if `charset` has fewer than
/// two distinct characters or contains non-ASCII bytes, and
/// [`CryptoError::RandomUnavailable`] if the entropy source cannot be read.
pub fn generate_password(length: usize, charset: &[u8]) -> Result<String, CryptoError> {
    generate_password_with(&mut OsRng, length, charset)
}

/// [`generate_password`] with an explicit randomness source.
///
/// # Errors
///
/// Same as [`generate_password`].
pub fn generate_password_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    length: usize,
    charset: &[u8],
) -> Result<String, CryptoError> {
    validate_charset(charset)?;

    let mut chars = Vec::with_capacity(length);
    for _ in 0..length {
        let index = random::uniform_index_with(rng, charset.len())?;
        chars.push(charset[index]);
    }

    String::from_utf8(chars)
        .map_err(|e| CryptoError::InvalidCharacterSet(format!("password is not UTF-8: {e}")))
}

fn validate_charset(charset: &[u8]) -> Result<(), CryptoError> {
    let mut seen = [false; 128];
    let mut distinct = 0usize;
    for &c in charset {
        if !c.is_ascii() {
            return Err(CryptoError::InvalidCharacterSet(format!(
                "non-ASCII byte 0x{c:02x} in character set"
            )));
        }
        let slot = &mut seen[usize::from(c)];
        if !*slot {
            *slot = true;
            distinct = distinct.saturating_add(1);
        }
    }

    if distinct < MIN_DISTINCT_CHARS {
        return Err(CryptoError::InvalidCharacterSet(format!(
            "at least {MIN_DISTINCT_CHARS} distinct characters required, got {distinct}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

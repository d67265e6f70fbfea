//! Cryptographic error types for `keystone-crypto-core`.

use thiserror::Error;

/// Errors produced by cryptographic operations.
///
/// A failed MAC comparison is not an error: [`crate::mac::verify`] simply
/// returns `false`.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The OS entropy source could not be read. There is no safe fallback;
    /// the surrounding operation must be aborted.
    #[error("random source unavailable: {0}")]
    RandomUnavailable(String),

    /// Key length does not match any AES key size (16, 24 or 32 bytes).
    #[error("invalid key length: {actual} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength {
        /// Length of the rejected key.
        actual: usize,
    },

    /// Ciphertext too short to hold an IV.
    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    /// Password character set unusable (fewer than 2 distinct characters, non-ASCII).
    #[error("invalid character set: {0}")]
    InvalidCharacterSet(String),

    /// Malformed KDF or generator parameters.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl CryptoError {
    /// Returns `true` for errors that leave the caller no safe way to continue.
    ///
    /// Only [`CryptoError::RandomUnavailable`] is fatal. Whether that aborts
    /// the current operation or the whole process is the caller's decision.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::RandomUnavailable(_))
    }
}

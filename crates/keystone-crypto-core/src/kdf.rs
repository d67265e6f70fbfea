//! Argon2 password hashing / key derivation.
//!
//! This module provides:
//! - [`derive_key`]: derive a 256-bit key from a password + salt with the
//!   process-wide [`KdfParams::DEFAULT`]
//! - [`derive_key_with`]: same, with a caller-supplied parameter set
//! - [`KdfParams`]: serializable parameter set, meant to be stored next to
//!   the salt so that a later change of defaults does not orphan old keys
//!
//! # Parallelism
//!
//! Argon2 output depends on the lane count. The default pins it to
//! [`DEFAULT_PARALLELISM`] so that keys reproduce on any host;
//! [`KdfParams::with_host_parallelism`] follows the local CPU count instead
//! and must be stored with the salt.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::memory::{SecretBuffer, SecretBytes};

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Default time cost (iterations).
pub const DEFAULT_T_COST: u32 = 8;

/// Default memory cost in KiB (32 MiB).
pub const DEFAULT_M_COST: u32 = 32 * 1024;

/// Default degree of parallelism (lanes).
pub const DEFAULT_PARALLELISM: u32 = 4;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Argon2 variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KdfAlgorithm {
    /// Data-independent memory access. Default, compatible with keys
    /// produced by earlier releases.
    Argon2i,
    /// Hybrid of Argon2i and Argon2d.
    Argon2id,
}

impl KdfAlgorithm {
    const fn to_argon2(self) -> argon2::Algorithm {
        match self {
            Self::Argon2i => argon2::Algorithm::Argon2i,
            Self::Argon2id => argon2::Algorithm::Argon2id,
        }
    }
}

/// Argon2 parameter set.
///
/// Fields use the `argon2` crate convention:
/// - `m_cost`: memory in KiB
/// - `t_cost`: number of iterations
/// - `p_cost`: degree of parallelism
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    /// Argon2 variant.
    pub algorithm: KdfAlgorithm,
    /// Memory cost in kibibytes.
    pub m_cost: u32,
    /// Number of iterations.
    pub t_cost: u32,
    /// Number of lanes.
    pub p_cost: u32,
    /// Output length in bytes.
    pub output_len: usize,
}

impl KdfParams {
    /// Process-wide parameter set used by [`derive_key`].
    pub const DEFAULT: Self = Self {
        algorithm: KdfAlgorithm::Argon2i,
        m_cost: DEFAULT_M_COST,
        t_cost: DEFAULT_T_COST,
        p_cost: DEFAULT_PARALLELISM,
        output_len: KEY_LEN,
    };

    /// Default costs with one lane per available processing unit.
    ///
    /// Keys derived this way only reproduce on hosts reporting the same
    /// parallelism unless the returned value is persisted with the salt.
    #[must_use]
    pub fn with_host_parallelism() -> Self {
        let lanes = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        let p_cost = u32::try_from(lanes)
            .unwrap_or(u32::MAX)
            .min(argon2::Params::MAX_P_COST);
        Self {
            p_cost,
            ..Self::DEFAULT
        }
    }

    /// Check the parameter set against Argon2's limits.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParameters`] if any cost or the output
    /// length is out of range.
    pub fn validate(&self) -> Result<(), CryptoError> {
        self.to_argon2_params().map(|_| ())
    }

    fn to_argon2_params(&self) -> Result<argon2::Params, CryptoError> {
        argon2::Params::new(self.m_cost, self.t_cost, self.p_cost, Some(self.output_len))
            .map_err(|e| CryptoError::InvalidParameters(format!("invalid argon2 params: {e}")))
    }

    fn hasher(&self) -> Result<argon2::Argon2<'static>, CryptoError> {
        Ok(argon2::Argon2::new(
            self.algorithm.to_argon2(),
            argon2::Version::V0x13,
            self.to_argon2_params()?,
        ))
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// Core KDF
// ---------------------------------------------------------------------------

/// Derive a 256-bit key from `password` and `salt` with [`KdfParams::DEFAULT`].
///
/// Deterministic: the same password and salt always yield the same key.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidParameters`] if the salt is shorter than
/// Argon2's 8-byte minimum.
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<SecretBytes<KEY_LEN>, CryptoError> {
    let mut output = [0u8; KEY_LEN];
    hash_into(password, salt, &KdfParams::DEFAULT, &mut output)?;
    let key = SecretBytes::new(output);
    output.zeroize();
    Ok(key)
}

/// Derive `params.output_len` bytes from `password` and `salt`.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidParameters`] if `params` is malformed or the
/// salt is shorter than Argon2's 8-byte minimum.
pub fn derive_key_with(
    password: &[u8],
    salt: &[u8],
    params: &KdfParams,
) -> Result<SecretBuffer, CryptoError> {
    // Validate before allocating `output_len` bytes.
    params.validate()?;
    let mut output = vec![0u8; params.output_len];
    hash_into(password, salt, params, &mut output)?;
    Ok(SecretBuffer::from_vec(output))
}

fn hash_into(
    password: &[u8],
    salt: &[u8],
    params: &KdfParams,
    output: &mut [u8],
) -> Result<(), CryptoError> {
    tracing::debug!(
        algorithm = ?params.algorithm,
        m_cost = params.m_cost,
        t_cost = params.t_cost,
        p_cost = params.p_cost,
        output_len = params.output_len,
        "deriving key"
    );

    params
        .hasher()?
        .hash_password_into(password, salt, output)
        .map_err(|e| CryptoError::InvalidParameters(format!("argon2 derivation failed: {e}")))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

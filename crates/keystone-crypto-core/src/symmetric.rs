//! AES in full-block CFB mode.
//!
//! This module provides:
//! - [`encrypt`]: encrypt with a fresh random IV, returning `IV || ciphertext`
//! - [`decrypt`]: split the IV off and decrypt, returning [`SecretBuffer`]
//!
//! CFB is a stream mode: no padding, output is exactly [`IV_LEN`] bytes
//! longer than the plaintext. It carries no integrity check; pair it with
//! [`crate::mac::tag`] over the ciphertext (encrypt-then-MAC).
//!
//! The AES variant follows the key length: 16, 24 or 32 bytes select
//! AES-128, AES-192 or AES-256.

use aes::{Aes128, Aes192, Aes256};
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use cfb_mode::{Decryptor, Encryptor};
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::memory::SecretBuffer;
use crate::random;

/// IV length in bytes (one AES block).
pub const IV_LEN: usize = 16;

/// AES-256 key length in bytes, the size produced by [`crate::kdf::derive_key`].
pub const KEY_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// AES key size, selected from the key length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AesVariant {
    /// 128-bit key.
    Aes128,
    /// 192-bit key.
    Aes192,
    /// 256-bit key.
    Aes256,
}

impl AesVariant {
    /// Map a key length to its AES variant.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyLength`] for any length other than 16, 24 or 32.
    pub const fn from_key_len(len: usize) -> Result<Self, CryptoError> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            actual => Err(CryptoError::InvalidKeyLength { actual }),
        }
    }

    /// Key length in bytes.
    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }
}

// ---------------------------------------------------------------------------
// Core encryption
// ---------------------------------------------------------------------------

/// Encrypt `plaintext` under `key` with a fresh random IV.
///
/// Returns `IV (16 bytes) || ciphertext`. Two calls with the same key and
/// plaintext produce different output.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidKeyLength`] if the key is not 16, 24 or 32
/// bytes, and [`CryptoError::RandomUnavailable`] if no IV can be drawn.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let variant = AesVariant::from_key_len(key.len())?;

    let mut out = vec![0u8; IV_LEN.saturating_add(plaintext.len())];
    let (iv, payload) = out.split_at_mut(IV_LEN);
    random::fill(iv)?;
    payload.copy_from_slice(plaintext);

    if let Err(e) = cfb_encrypt(variant, key, iv, payload) {
        out.zeroize();
        return Err(e);
    }
    Ok(out)
}

/// Decrypt `IV || ciphertext` produced by [`encrypt`].
///
/// A tampered or wrongly keyed input decrypts to garbage without error;
/// authenticate it with [`crate::mac::verify`] first.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidKeyLength`] if the key is not 16, 24 or 32
/// bytes, and [`CryptoError::InvalidCiphertext`] if the input is shorter
/// than one IV.
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<SecretBuffer, CryptoError> {
    let variant = AesVariant::from_key_len(key.len())?;

    if ciphertext.len() < IV_LEN {
        return Err(CryptoError::InvalidCiphertext(format!(
            "ciphertext too short: {} bytes (minimum {IV_LEN})",
            ciphertext.len()
        )));
    }

    let (iv, payload) = ciphertext.split_at(IV_LEN);
    let mut plaintext = payload.to_vec();
    if let Err(e) = cfb_decrypt(variant, key, iv, &mut plaintext) {
        plaintext.zeroize();
        return Err(e);
    }
    Ok(SecretBuffer::from_vec(plaintext))
}

fn cfb_encrypt(
    variant: AesVariant,
    key: &[u8],
    iv: &[u8],
    buf: &mut [u8],
) -> Result<(), CryptoError> {
    let invalid = |_| CryptoError::InvalidKeyLength { actual: key.len() };
    match variant {
        AesVariant::Aes128 => Encryptor::<Aes128>::new_from_slices(key, iv)
            .map_err(invalid)?
            .encrypt(buf),
        AesVariant::Aes192 => Encryptor::<Aes192>::new_from_slices(key, iv)
            .map_err(invalid)?
            .encrypt(buf),
        AesVariant::Aes256 => Encryptor::<Aes256>::new_from_slices(key, iv)
            .map_err(invalid)?
            .encrypt(buf),
    }
    Ok(())
}

fn cfb_decrypt(
    variant: AesVariant,
    key: &[u8],
    iv: &[u8],
    buf: &mut [u8],
) -> Result<(), CryptoError> {
    let invalid = |_| CryptoError::InvalidKeyLength { actual: key.len() };
    match variant {
        AesVariant::Aes128 => Decryptor::<Aes128>::new_from_slices(key, iv)
            .map_err(invalid)?
            .decrypt(buf),
        AesVariant::Aes192 => Decryptor::<Aes192>::new_from_slices(key, iv)
            .map_err(invalid)?
            .decrypt(buf),
        AesVariant::Aes256 => Decryptor::<Aes256>::new_from_slices(key, iv)
            .map_err(invalid)?
            .decrypt(buf),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

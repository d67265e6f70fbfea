//! `keystone-crypto-core`: cryptographic primitives for protecting secrets
//! at rest and in transit.
//!
//! Synchronous and stateless: no I/O beyond the OS entropy source, no
//! network, no persistence. Callers supply keys, salts and buffers and get
//! back derived keys, ciphertext, tags or verification results.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;
pub mod random;

pub mod password;

pub mod kdf;
pub mod symmetric;

pub mod mac;

pub mod checksum;

pub use checksum::{digest, DIGEST_LEN};
pub use error::CryptoError;
pub use kdf::{derive_key, derive_key_with, KdfAlgorithm, KdfParams, KEY_LEN};
pub use mac::{tag, verify, TAG_LEN};
pub use memory::{SecretBuffer, SecretBytes};
pub use password::{
    default_password_charset, generate_password, generate_random_bytes, generate_salt, SALT_LEN,
};
pub use symmetric::{decrypt, encrypt, AesVariant, IV_LEN};

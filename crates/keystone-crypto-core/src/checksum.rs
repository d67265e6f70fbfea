//! SHA-512 content checksums.
//!
//! Integrity only: anyone can recompute a checksum, so it does not
//! authenticate. Use [`crate::mac`] against deliberate forgery.

use ring::digest;

/// SHA-512 digest length in bytes.
pub const DIGEST_LEN: usize = 64;

/// SHA-512 digest of `message`.
#[must_use]
pub fn digest(message: &[u8]) -> [u8; DIGEST_LEN] {
    let hash = digest::digest(&digest::SHA512, message);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(hash.as_ref());
    out
}

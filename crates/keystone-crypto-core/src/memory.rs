//! Zeroizing containers for key material and decrypted plaintext.
//!
//! - [`SecretBytes`] holds fixed-size secrets such as derived keys
//! - [`SecretBuffer`] holds variable-length secrets such as plaintext
//!
//! Both erase their contents on drop and never print them through
//! `Debug` or `Display`.

use secrecy::{ExposeSecret, SecretSlice};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ---------------------------------------------------------------------------
// SecretBuffer: variable-length
// ---------------------------------------------------------------------------

/// Variable-length buffer for sensitive data.
///
/// Wraps [`SecretSlice<u8>`] from the `secrecy` crate, which zeroizes the
/// heap allocation on drop.
pub struct SecretBuffer {
    inner: SecretSlice<u8>,
}

impl SecretBuffer {
    /// Copy `data` into a new zeroizing allocation.
    ///
    /// The caller should zeroize the source after calling this.
    #[must_use]
    pub fn new(data: &[u8]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Take ownership of `data` without copying it.
    #[must_use]
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { inner: data.into() }
    }

    /// Expose the underlying bytes. Keep the borrow short.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    /// Returns the number of bytes in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.expose_secret().len()
    }

    /// Returns `true` if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretBuffer(***)")
    }
}

impl fmt::Display for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretBuffer(***)")
    }
}

// ---------------------------------------------------------------------------
// SecretBytes<N>: fixed-size
// ---------------------------------------------------------------------------

/// Fixed-size buffer for keys.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Move `data` into a zeroizing container.
    #[must_use]
    pub const fn new(data: [u8; N]) -> Self {
        Self { bytes: data }
    }

    /// Expose the underlying bytes for cryptographic operations.
    #[must_use]
    pub const fn expose(&self) -> &[u8; N] {
        &self.bytes
    }
}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{N}>(***)")
    }
}

impl<const N: usize> fmt::Display for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{N}>(***)")
    }
}

impl<const N: usize> From<[u8; N]> for SecretBytes<N> {
    fn from(data: [u8; N]) -> Self {
        Self::new(data)
    }
}

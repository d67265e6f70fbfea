//! HMAC-SHA512 message authentication.
//!
//! [`tag`] computes the raw 64-byte tag via `ring::hmac`; [`verify`]
//! compares two tags without leaking the position of the first difference.

use ring::hmac;

/// HMAC-SHA512 tag length in bytes.
pub const TAG_LEN: usize = 64;

/// Compute the HMAC-SHA512 tag of `message` under `key`.
#[must_use]
pub fn tag(key: &[u8], message: &[u8]) -> [u8; TAG_LEN] {
    let key = hmac::Key::new(hmac::HMAC_SHA512, key);
    let signature = hmac::sign(&key, message);
    let mut out = [0u8; TAG_LEN];
    out.copy_from_slice(signature.as_ref());
    out
}

/// Compare two tags in constant time.
///
/// Returns `false` on any mismatch, including a length mismatch. A `false`
/// result is an ordinary outcome, not an error.
#[must_use = "verification result must be checked"]
pub fn verify(expected: &[u8], actual: &[u8]) -> bool {
    constant_time_eq(expected, actual)
}

/// Constant-time byte comparison.
///
/// Every byte pair is XORed and OR-accumulated, so run time depends only on
/// the length. The early return on length mismatch only reveals the length,
/// which for tags is public.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    std::hint::black_box(diff) == 0
}

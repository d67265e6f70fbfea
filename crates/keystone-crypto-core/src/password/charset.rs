//! Default password alphabet: printable ASCII, space through tilde.

/// First character of the default alphabet (`0x20`).
pub const FIRST_PRINTABLE: u8 = b' ';

/// Last character of the default alphabet (`0x7E`).
pub const LAST_PRINTABLE: u8 = b'~';

/// Number of characters in the default alphabet.
#[allow(clippy::arithmetic_side_effects)]
pub const DEFAULT_CHARSET_LEN: usize = (LAST_PRINTABLE - FIRST_PRINTABLE + 1) as usize;

/// The default alphabet in ascending order, built at compile time.
pub static DEFAULT_PASSWORD_CHARSET: [u8; DEFAULT_CHARSET_LEN] = build_default_charset();

#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
const fn build_default_charset() -> [u8; DEFAULT_CHARSET_LEN] {
    let mut table = [0u8; DEFAULT_CHARSET_LEN];
    let mut i = 0;
    while i < DEFAULT_CHARSET_LEN {
        table[i] = FIRST_PRINTABLE + i as u8;
        i += 1;
    }
    table
}

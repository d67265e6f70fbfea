mod argon2i;

/// Decode a lowercase hex test vector.
fn hex(s: &str) -> Vec<u8> {
    data_encoding::HEXLOWER
        .decode(s.as_bytes())
        .expect("test vector should be valid hex")
}

//! RFC 9106 Section 5.2: Argon2i Known-Answer Test vector.
//!
//! The RFC vector uses a secret key and associated data, which `derive_key`
//! does not expose, so the `argon2` crate is checked directly and the
//! wrapper is checked for consistency with it.

use keystone_crypto_core::kdf::{derive_key_with, KdfAlgorithm, KdfParams};

/// RFC 9106 Section 5.2: Argon2i, version 0x13.
#[test]
fn rfc9106_section_5_2_argon2i() {
    // Memory: 32 KiB, Iterations: 3, Parallelism: 4
    // Password: 32 x 0x01, Salt: 16 x 0x02, Secret: 8 x 0x03, AD: 12 x 0x04
    let password = [0x01u8; 32];
    let salt = [0x02u8; 16];
    let secret = [0x03u8; 8];
    let ad_bytes = [0x04u8; 12];

    let ad = argon2::AssociatedData::new(&ad_bytes).expect("AD should be valid");
    let mut builder = argon2::ParamsBuilder::new();
    builder.m_cost(32);
    builder.t_cost(3);
    builder.p_cost(4);
    builder.output_len(32);
    builder.data(ad);
    let params = builder.build().expect("params with AD should be valid");

    let argon2 = argon2::Argon2::new_with_secret(
        &secret,
        argon2::Algorithm::Argon2i,
        argon2::Version::V0x13,
        params,
    )
    .expect("argon2 with secret should be valid");

    let mut output = [0u8; 32];
    argon2
        .hash_password_into(&password, &salt, &mut output)
        .expect("hash_password_into should succeed");

    let expected: [u8; 32] = [
        0xc8, 0x14, 0xd9, 0xd1, 0xdc, 0x7f, 0x37, 0xaa, 0x13, 0xf0, 0xd7, 0x7f, 0x24, 0x94, 0xbd,
        0xa1, 0xc8, 0xde, 0x6b, 0x01, 0x6d, 0xd3, 0x88, 0xd2, 0x99, 0x52, 0xa4, 0xc4, 0x67, 0x2b,
        0x6c, 0xe8,
    ];

    assert_eq!(output, expected, "RFC 9106 Section 5.2 Argon2i KAT mismatch");
}

/// `derive_key_with` agrees with a plain `argon2` call on the same inputs.
#[test]
fn wrapper_matches_argon2_crate() {
    let params = KdfParams {
        algorithm: KdfAlgorithm::Argon2i,
        m_cost: 64,
        t_cost: 2,
        p_cost: 2,
        output_len: 32,
    };
    let password = b"correct horse battery staple";
    let salt = [0x5Au8; 32];

    let raw = argon2::Argon2::new(
        argon2::Algorithm::Argon2i,
        argon2::Version::V0x13,
        argon2::Params::new(64, 2, 2, Some(32)).expect("params should be valid"),
    );
    let mut expected = [0u8; 32];
    raw.hash_password_into(password, &salt, &mut expected)
        .expect("hash_password_into should succeed");

    let key = derive_key_with(password, &salt, &params).expect("derive should succeed");
    assert_eq!(key.expose(), &expected);
}

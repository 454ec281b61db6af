//! Helpers shared by the integration tests.

#![allow(dead_code)]

/// Decodes a hex test vector. Panics on malformed input, which can only be
/// a typo in the test itself.
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|err| panic!("malformed hex vector {s:?}: {err}"))
}

/// Hex-encodes a digest for readable assertion messages.
pub fn tohex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// One million repetitions of `a`, the long-message vector of the NIST
/// examples.
pub fn million_a() -> Vec<u8> {
    vec![b'a'; 1_000_000]
}

/// The 448-bit two-block message of the NIST SHA-1 / SHA-256 examples.
pub const TWO_BLOCK_256: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

/// The 896-bit two-block message of the NIST SHA-384 / SHA-512 examples.
pub const TWO_BLOCK_512: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

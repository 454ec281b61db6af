//! Derived SHA constants
//!
//! FIPS 180-4 lists its round constants and initialization vectors as
//! opaque hexadecimal tables. This module computes them instead:
//!
//! - SHA-224/256 round constants: first 32 fractional bits of the cube roots
//!   of the first 64 primes (§4.2.2)
//! - SHA-384/512 round constants: first 64 fractional bits of the cube roots
//!   of the first 80 primes (§4.2.3)
//! - SHA-256 / SHA-512 IVs: fractional bits of the square roots of the first
//!   8 primes (§5.3.3, §5.3.5)
//! - SHA-384 IV: 64 fractional bits of the square roots of the 9th to 16th
//!   primes (§5.3.4), and the SHA-224 IV is the low half of each of those
//!   words (§5.3.2)
//! - SHA-1 round constants: leading 32 bits of √2, √3, √5 and √10 (§4.2.1)
//!
//! SHA-1's IV has no root derivation; it is the byte pattern `01 23 .. ef`,
//! `fe dc .. 10`, `f0 e1 d2 c3` read little-endian.
//!
//! Every table is derived once, on first use, and then shared read-only for
//! the lifetime of the process.

pub mod primes;
pub mod roots;

use std::sync::OnceLock;

use crate::primitives::Word;
use primes::{first_primes, nth_prime};
use roots::{nth_root_fractional_bits, scaled_root};

/// Derives `N` round constants: the cube roots of the first `N` primes.
pub fn derive_round_constants<W: Word, const N: usize>() -> [W; N] {
    first_primes::<N>().map(|prime| nth_root_fractional_bits::<W>(prime, 3))
}

/// Derives 8 initialization vector words from the square roots of the
/// primes starting at zero-based prime index `offset`.
pub fn derive_square_root_words<W: Word>(offset: usize) -> [W; 8] {
    std::array::from_fn(|i| nth_root_fractional_bits::<W>(nth_prime(offset + i), 2))
}

/// Derives SHA-1's 80 round constants.
///
/// Each run of 20 rounds uses `⌊√n · 2^30⌋` for n = 2, 3, 5, 10 in turn.
pub fn derive_sha1_round_constants() -> [u32; 80] {
    const RADICANDS: [u64; 4] = [2, 3, 5, 10];

    let stages = RADICANDS.map(|n| scaled_root(n, 2, 30) as u32);

    std::array::from_fn(|t| stages[t / 20])
}

static SHA1_K: OnceLock<[u32; 80]> = OnceLock::new();
static SHA256_K: OnceLock<[u32; 64]> = OnceLock::new();
static SHA512_K: OnceLock<[u64; 80]> = OnceLock::new();

static SHA224_IV: OnceLock<[u32; 8]> = OnceLock::new();
static SHA256_IV: OnceLock<[u32; 8]> = OnceLock::new();
static SHA384_IV: OnceLock<[u64; 8]> = OnceLock::new();
static SHA512_IV: OnceLock<[u64; 8]> = OnceLock::new();

/// SHA-1 round constants (FIPS 180-4 §4.2.1).
pub fn sha1_round_constants() -> &'static [u32; 80] {
    SHA1_K.get_or_init(derive_sha1_round_constants)
}

/// SHA-224 and SHA-256 round constants (FIPS 180-4 §4.2.2).
pub fn sha256_round_constants() -> &'static [u32; 64] {
    SHA256_K.get_or_init(derive_round_constants::<u32, 64>)
}

/// SHA-384, SHA-512 and SHA-512/t round constants (FIPS 180-4 §4.2.3).
pub fn sha512_round_constants() -> &'static [u64; 80] {
    SHA512_K.get_or_init(derive_round_constants::<u64, 80>)
}

/// SHA-1 initial hash value (FIPS 180-4 §5.3.1).
pub fn sha1_initialization_vector() -> [u32; 5] {
    [
        u32::from_le_bytes([0x01, 0x23, 0x45, 0x67]),
        u32::from_le_bytes([0x89, 0xab, 0xcd, 0xef]),
        u32::from_le_bytes([0xfe, 0xdc, 0xba, 0x98]),
        u32::from_le_bytes([0x76, 0x54, 0x32, 0x10]),
        u32::from_le_bytes([0xf0, 0xe1, 0xd2, 0xc3]),
    ]
}

/// SHA-224 initial hash value (FIPS 180-4 §5.3.2).
pub fn sha224_initialization_vector() -> [u32; 8] {
    *SHA224_IV.get_or_init(|| derive_square_root_words::<u64>(8).map(|word| word as u32))
}

/// SHA-256 initial hash value (FIPS 180-4 §5.3.3).
pub fn sha256_initialization_vector() -> [u32; 8] {
    *SHA256_IV.get_or_init(|| derive_square_root_words::<u32>(0))
}

/// SHA-384 initial hash value (FIPS 180-4 §5.3.4).
pub fn sha384_initialization_vector() -> [u64; 8] {
    *SHA384_IV.get_or_init(|| derive_square_root_words::<u64>(8))
}

/// SHA-512 initial hash value (FIPS 180-4 §5.3.5).
pub fn sha512_initialization_vector() -> [u64; 8] {
    *SHA512_IV.get_or_init(|| derive_square_root_words::<u64>(0))
}

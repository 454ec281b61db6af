//! SHA-512/t (FIPS 180-4 §5.3.6 and §6.7)
//!
//! SHA-512/t is SHA-512 with a per-t initialization vector and the digest
//! truncated to its leftmost t bits. The IV for a given t is itself a
//! SHA-512 computation:
//!
//! 1. XOR every word of the SHA-512 IV with `0xa5a5a5a5a5a5a5a5`;
//! 2. hash the ASCII string `"SHA-512/t"` (t in decimal, no leading zeros)
//!    with that modified IV;
//! 3. the resulting eight-word state, untruncated, is the SHA-512/t IV.
//!
//! t = 384 is excluded because SHA-384 has its own, non-derived IV.
//!
//! Derived IVs are cached per t for the lifetime of the process, so the
//! bootstrap hash runs at most once for each truncation length.

use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

use crate::constants::{sha512_initialization_vector, sha512_round_constants};
use crate::error::ShaError;
use crate::hash::output;
use crate::hash::sha2::hash_blocks;

/// XOR mask applied to the SHA-512 IV before the bootstrap hash.
const IV_MASK: u64 = 0xa5a5_a5a5_a5a5_a5a5;

/// Width of the SHA-512 state in bits.
const STATE_BITS: usize = 512;

static DERIVED_IVS: [OnceLock<[u64; 8]>; STATE_BITS] = [const { OnceLock::new() }; STATE_BITS];

/// A validated SHA-512/t truncation length.
///
/// Holds a `t` with `0 < t < 512` and `t != 384`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Truncation(u16);

impl Truncation {
    /// SHA-512/224.
    pub const SHA512_224: Self = Self(224);

    /// SHA-512/256.
    pub const SHA512_256: Self = Self(256);

    /// Validates a truncation length in bits.
    ///
    /// # Errors
    /// Returns [`ShaError::InvalidTruncation`] for 0, 384, and anything
    /// of 512 or more.
    pub fn new(bits: usize) -> Result<Self, ShaError> {
        if bits == 0 || bits == 384 || bits >= STATE_BITS {
            return Err(ShaError::InvalidTruncation(bits));
        }

        Ok(Self(bits as u16))
    }

    /// The truncation length `t` in bits.
    pub fn bits(self) -> usize {
        self.0 as usize
    }

    /// Digest length in bytes, `⌈t / 8⌉`.
    pub fn bytes(self) -> usize {
        self.bits().div_ceil(8)
    }

    /// The message hashed to derive this variant's IV, e.g. `"SHA-512/224"`.
    pub fn label(self) -> String {
        format!("SHA-512/{}", self.0)
    }

    /// The (cached) SHA-512/t initialization vector.
    pub fn initialization_vector(self) -> [u64; 8] {
        initialization_vector(self)
    }

    /// Computes the SHA-512/t digest of `message`.
    pub fn hash(self, message: &[u8]) -> Vec<u8> {
        let state = hash_blocks(
            self.initialization_vector(),
            sha512_round_constants(),
            message,
        );

        output::truncate_bits(&output::to_be_bytes(&state), self.bits())
    }
}

impl Display for Truncation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Derives the SHA-512/t initialization vector without consulting the cache.
pub fn derive_initialization_vector(t: Truncation) -> [u64; 8] {
    let intermediate = sha512_initialization_vector().map(|word| word ^ IV_MASK);

    hash_blocks(
        intermediate,
        sha512_round_constants(),
        t.label().as_bytes(),
    )
}

/// Returns the SHA-512/t initialization vector, deriving it on first use.
pub fn initialization_vector(t: Truncation) -> [u64; 8] {
    *DERIVED_IVS[t.bits()].get_or_init(|| derive_initialization_vector(t))
}

/// Computes the SHA-512/t digest of `message` for `bits = t`.
///
/// # Errors
/// Returns [`ShaError::InvalidTruncation`] before any hashing if `bits` is
/// 0, 384, or 512 and above.
pub fn sha512_t(bits: usize, message: &[u8]) -> Result<Vec<u8>, ShaError> {
    let t = Truncation::new(bits)?;

    Ok(t.hash(message))
}

/// Computes the SHA-512/224 digest of `message`.
pub fn sha512_224(message: &[u8]) -> [u8; 28] {
    let state = hash_blocks(
        initialization_vector(Truncation::SHA512_224),
        sha512_round_constants(),
        message,
    );

    output::digest_array(&state)
}

/// Computes the SHA-512/256 digest of `message`.
pub fn sha512_256(message: &[u8]) -> [u8; 32] {
    let state = hash_blocks(
        initialization_vector(Truncation::SHA512_256),
        sha512_round_constants(),
        message,
    );

    output::digest_array(&state)
}

//! SHA word abstraction
//!
//! Every SHA-1 and SHA-2 variant operates on words of a single fixed width:
//! 32 bits for SHA-1, SHA-224 and SHA-256, and 64 bits for SHA-384, SHA-512
//! and SHA-512/t. The `Word` trait captures what the padding, compression
//! and serialization code needs from such a word, so that one generic
//! pipeline serves both widths.
//!
//! The trait also carries the per-width parameters of FIPS 180-4 §4.1.2 and
//! §4.1.3: the rotation and shift amounts of σ0, σ1, Σ0, Σ1, and the number
//! of rounds per block.

use std::fmt::{Debug, LowerHex};
use std::ops::{BitAnd, BitOr, BitXor, Not, Shr};

/// A fixed-width unsigned word, with all arithmetic performed modulo 2^W.
pub trait Word:
    Copy
    + Default
    + Eq
    + Debug
    + LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Width of the word in bits.
    const BITS: u32;

    /// Width of the word in bytes.
    const BYTES: usize;

    /// Number of SHA-2 rounds (and message schedule entries) per block.
    const ROUNDS: usize;

    /// `(rotr, rotr, shr)` amounts of σ0.
    const SMALL_SIGMA0: (u32, u32, u32);

    /// `(rotr, rotr, shr)` amounts of σ1.
    const SMALL_SIGMA1: (u32, u32, u32);

    /// `(rotr, rotr, rotr)` amounts of Σ0.
    const BIG_SIGMA0: (u32, u32, u32);

    /// `(rotr, rotr, rotr)` amounts of Σ1.
    const BIG_SIGMA1: (u32, u32, u32);

    /// Addition modulo 2^W.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// ROTR^n, FIPS 180-4 §3.2.
    fn rotate_right(self, n: u32) -> Self;

    /// ROTL^n, FIPS 180-4 §3.2.
    fn rotate_left(self, n: u32) -> Self;

    /// Reads a word from exactly `BYTES` big-endian bytes.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Appends the big-endian encoding of the word to `out`.
    fn extend_be(self, out: &mut Vec<u8>);

    /// Keeps the low `BITS` bits of `value`.
    fn from_low_bits(value: u128) -> Self;
}

macro_rules! impl_word {
    (
        $t:ty,
        rounds: $rounds:expr,
        small_sigma0: $ss0:expr,
        small_sigma1: $ss1:expr,
        big_sigma0: $bs0:expr,
        big_sigma1: $bs1:expr $(,)?
    ) => {
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const BYTES: usize = size_of::<$t>();
            const ROUNDS: usize = $rounds;

            const SMALL_SIGMA0: (u32, u32, u32) = $ss0;
            const SMALL_SIGMA1: (u32, u32, u32) = $ss1;
            const BIG_SIGMA0: (u32, u32, u32) = $bs0;
            const BIG_SIGMA1: (u32, u32, u32) = $bs1;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn rotate_right(self, n: u32) -> Self {
                <$t>::rotate_right(self, n)
            }

            #[inline(always)]
            fn rotate_left(self, n: u32) -> Self {
                <$t>::rotate_left(self, n)
            }

            #[inline(always)]
            fn from_be_slice(bytes: &[u8]) -> Self {
                debug_assert_eq!(bytes.len(), size_of::<$t>());

                bytes
                    .iter()
                    .fold(0, |acc: $t, &byte| (acc << 8) | <$t>::from(byte))
            }

            #[inline(always)]
            fn extend_be(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_be_bytes());
            }

            #[inline(always)]
            fn from_low_bits(value: u128) -> Self {
                value as $t
            }
        }
    };
}

// FIPS 180-4 §4.1.2 (equations 4.4 to 4.7)
impl_word!(
    u32,
    rounds: 64,
    small_sigma0: (7, 18, 3),
    small_sigma1: (17, 19, 10),
    big_sigma0: (2, 13, 22),
    big_sigma1: (6, 11, 25),
);

// FIPS 180-4 §4.1.3 (equations 4.10 to 4.13)
impl_word!(
    u64,
    rounds: 80,
    small_sigma0: (1, 8, 7),
    small_sigma1: (19, 61, 6),
    big_sigma0: (28, 34, 39),
    big_sigma1: (14, 18, 41),
);

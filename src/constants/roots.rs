//! Extended-precision root extraction
//!
//! SHA-2 constants are "the first W bits of the fractional parts" of square
//! and cube roots of primes. A 64-bit word needs 64 exact fractional bits on
//! top of the integer part, which is beyond an `f64` (53-bit mantissa) and
//! close to the limit of IEEE quad precision (113 bits).
//!
//! Roots are therefore computed with Newton–Raphson iteration on a
//! fixed-point number: a `U512` holding `value · 2^FRACTION_BITS`. All
//! divisions truncate, so each iterate is within a couple of units in the
//! last place of the exact value once the iteration has settled.

use crate::primitives::{U512, Word};

/// Number of fractional bits carried by the fixed-point representation.
pub const FRACTION_BITS: u32 = 128;

/// Iteration stops once successive guesses differ by at most 2^-107
/// (about 6.2e-33, below the 1e-32 the constants need).
const TOLERANCE_BITS: u32 = 107;

/// Upper bound on Newton steps. Inputs used by the crate settle in under 20.
const MAX_ITERATIONS: usize = 256;

#[inline]
fn fixed_mul(a: U512, b: U512) -> U512 {
    (a * b) >> FRACTION_BITS
}

#[inline]
fn fixed_div(a: U512, b: U512) -> U512 {
    (a << FRACTION_BITS) / b
}

/// Computes `value^(1/root)` as a fixed-point number with
/// [`FRACTION_BITS`] fractional bits.
///
/// Starting from the guess 1.0, iterates
///
/// ```text
/// x' = ((root - 1) · x + value / x^(root - 1)) / root
/// ```
///
/// until two successive guesses differ by at most 2^-107, and returns the
/// last guess.
///
/// Every guess stays below `2^(bits + 1)` in integer part, where `bits` is
/// the bit length of `value`, so the widest intermediate product has about
/// `(root - 1) · (bits + 1) + 256` bits and must fit in a `U512`.
///
/// # Panics
/// Panics if `root` is zero, or if `(root - 1) · (bits + 1) ≥ 256`, i.e.
/// the iteration could overflow 512 bits. Every root of degree up to 4 of
/// any `u64` is accepted.
pub fn nth_root(value: u64, root: u32) -> U512 {
    assert!(root > 0, "the zeroth root is undefined");

    if value == 0 {
        return U512::ZERO;
    }

    let bits = u64::from(u64::BITS - value.leading_zeros());
    assert!(
        u64::from(root - 1) * (bits + 1) < 256,
        "root {root} of a {bits}-bit value overflows 512-bit precision"
    );

    let one = U512::ONE << FRACTION_BITS;
    let target = U512::from(value) << FRACTION_BITS;
    let degree = U512::from(root);
    let weight = U512::from(root - 1);
    let tolerance = U512::ONE << (FRACTION_BITS - TOLERANCE_BITS);

    let mut guess = one;

    for _ in 0..MAX_ITERATIONS {
        let power = (1..root).fold(one, |acc, _| fixed_mul(acc, guess));
        let next = (weight * guess + fixed_div(target, power)) / degree;

        if guess.abs_diff(next) <= tolerance {
            return next;
        }

        guess = next;
    }

    guess
}

/// Returns `⌊value^(1/root) · 2^scale_bits⌋`, truncated to its low 128 bits.
///
/// SHA-1's round constants are such values: the leading 32 bits of √2, √3,
/// √5 and √10, i.e. `scaled_root(n, 2, 30)`.
///
/// # Panics
/// Panics if `root` is zero or `scale_bits` exceeds [`FRACTION_BITS`].
pub fn scaled_root(value: u64, root: u32, scale_bits: u32) -> u128 {
    assert!(
        scale_bits <= FRACTION_BITS,
        "cannot scale beyond {FRACTION_BITS} fractional bits"
    );

    (nth_root(value, root) >> (FRACTION_BITS - scale_bits)).low_u128()
}

/// Returns the first `W::BITS` bits of the fractional part of
/// `value^(1/root)`.
///
/// `nth_root_fractional_bits::<u32>(2, 3)` is `0x428a2f98`, the first
/// SHA-256 round constant.
pub fn nth_root_fractional_bits<W: Word>(value: u64, root: u32) -> W {
    W::from_low_bits(scaled_root(value, root, W::BITS))
}

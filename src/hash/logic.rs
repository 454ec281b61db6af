//! Bitwise logical functions of FIPS 180-4 §4.1
//!
//! Shared by SHA-1 and the SHA-2 family. `parity` is only used by SHA-1.

use crate::primitives::Word;

/// `Ch(x, y, z)`: each bit of `x` chooses the bit from `y` (set) or `z`
/// (clear).
#[inline(always)]
pub fn choose<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ ((!x) & z)
}

/// `Parity(x, y, z)`: set where an odd number of inputs are set.
#[inline(always)]
pub fn parity<W: Word>(x: W, y: W, z: W) -> W {
    x ^ y ^ z
}

/// `Maj(x, y, z)`: set where at least two inputs are set.
#[inline(always)]
pub fn majority<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

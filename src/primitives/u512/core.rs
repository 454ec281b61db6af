//! 512-bit unsigned integer primitive
//!
//! This module defines a fixed-size 512-bit unsigned integer type (`U512`)
//! used as the extended-precision carrier for constant derivation.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its one job is to hold fixed-point
//! approximations of square and cube roots with far more fractional bits
//! than any native float provides.
//!
//! The internal representation is big-endian, so the derived lexicographic
//! ordering of the byte array is the numeric ordering.

/// Fixed-size 512-bit unsigned integer.
///
/// The value is stored as 64 bytes in **big-endian** order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U512(pub(crate) [u8; 64]);

impl U512 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 64]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// Returns the value one encoded in big-endian form.
    const fn one_be() -> Self {
        let mut out = [0u8; 64];
        out[63] = 1;
        U512(out)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=512`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Returns the least significant 128 bits, discarding everything above.
    pub fn low_u128(&self) -> u128 {
        let mut low = [0u8; 16];
        low.copy_from_slice(&self.0[48..]);
        u128::from_be_bytes(low)
    }

    /// Absolute difference `|self - other|`.
    pub fn abs_diff(self, other: U512) -> U512 {
        if self >= other {
            self - other
        } else {
            other - self
        }
    }
}

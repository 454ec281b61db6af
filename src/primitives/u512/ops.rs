//! Arithmetic and bitwise operations for `U512`
//!
//! Only the operations fixed-point root extraction needs are provided:
//! addition, subtraction, truncating multiplication, long division and
//! shifts by a native bit count.
//!
//! All operations work directly on the big-endian byte array or on its
//! 64-bit limb view, with wrapping semantics for `+`, `-` and `*`.

use crate::primitives::u512::U512;
use std::ops::{Add, Div, Mul, Shl, Shr, Sub};

/// Logical left shift by `shift` bits.
///
/// Shifts greater than or equal to 512 bits yield zero.
impl Shl<u32> for U512 {
    type Output = U512;

    fn shl(self, shift: u32) -> Self::Output {
        let shift = shift as usize;

        if shift == 0 {
            return self;
        }
        if shift >= 512 {
            return U512::ZERO;
        }

        let byte_shift = shift / 8;
        let bit_shift = shift % 8;

        let mut out = [0u8; 64];

        for (i, o) in out.iter_mut().enumerate().take(64 - byte_shift) {
            let src = i + byte_shift;
            let mut val = self.0[src] << bit_shift;

            if bit_shift != 0 && src + 1 < 64 {
                val |= self.0[src + 1] >> (8 - bit_shift);
            }

            *o = val;
        }

        U512(out)
    }
}

/// Logical right shift by `shift` bits.
///
/// Shifts greater than or equal to 512 bits yield zero.
impl Shr<u32> for U512 {
    type Output = U512;

    fn shr(self, shift: u32) -> Self::Output {
        let shift = shift as usize;

        if shift == 0 {
            return self;
        }
        if shift >= 512 {
            return U512::ZERO;
        }

        let byte_shift = shift / 8;
        let bit_shift = shift % 8;

        let mut out = [0u8; 64];

        for (i, o) in out.iter_mut().enumerate().skip(byte_shift) {
            let src = i - byte_shift;
            let mut val = self.0[src] >> bit_shift;

            if bit_shift != 0 && src > 0 {
                val |= self.0[src - 1] << (8 - bit_shift);
            }

            *o = val;
        }

        U512(out)
    }
}

/// Addition modulo 2⁵¹².
impl Add for U512 {
    type Output = U512;

    fn add(self, rhs: U512) -> Self::Output {
        let mut out = [0u8; 64];
        let mut carry = 0u16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let sum = a as u16 + b as u16 + carry;
            *o = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }

        U512(out)
    }
}

/// Subtraction modulo 2⁵¹².
impl Sub for U512 {
    type Output = U512;

    fn sub(self, rhs: U512) -> Self::Output {
        let mut out = [0u8; 64];
        let mut borrow = 0i16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let lhs = a as i16;
            let sub = b as i16 + borrow;

            if lhs >= sub {
                *o = (lhs - sub) as u8;
                borrow = 0;
            } else {
                *o = (lhs + 256 - sub) as u8;
                borrow = 1;
            }
        }

        U512(out)
    }
}

/// Multiplication modulo 2⁵¹².
///
/// Schoolbook multiplication over little-endian 64-bit limbs, dropping every
/// partial product that lands above bit 511. The carry is propagated row by
/// row so the 128-bit accumulator never overflows.
impl Mul<U512> for U512 {
    type Output = U512;

    fn mul(self, rhs: U512) -> Self::Output {
        let mut lhs: [u64; 8] = self.into();
        let mut rhs: [u64; 8] = rhs.into();
        lhs.reverse();
        rhs.reverse();

        let mut acc = [0u64; 8];

        for (i, &a) in lhs.iter().enumerate() {
            if a == 0 {
                continue;
            }

            let mut carry = 0u128;

            for (j, &b) in rhs.iter().enumerate().take(8 - i) {
                let cur = acc[i + j] as u128 + a as u128 * b as u128 + carry;
                acc[i + j] = cur as u64;
                carry = cur >> 64;
            }
        }

        acc.reverse();
        U512::from(acc)
    }
}

/// Integer division (`/`) producing the quotient.
///
/// Classic shift-and-subtract long division, starting at the dividend's most
/// significant set bit.
///
/// # Panics
/// Panics if `rhs` is zero.
impl Div<U512> for U512 {
    type Output = U512;

    fn div(self, rhs: U512) -> Self::Output {
        assert!(rhs != U512::ZERO, "division by zero");

        if self < rhs {
            return U512::ZERO;
        }

        let mut quotient = [0u8; 64];
        let mut remainder = U512::ZERO;

        for bit in self.leading_zeros() as usize..512 {
            let byte_idx = bit >> 3;
            let bit_in_byte = 7 - (bit & 7);

            let incoming = (self.0[byte_idx] >> bit_in_byte) & 1;

            remainder = remainder << 1;
            remainder.0[63] |= incoming;

            if remainder >= rhs {
                remainder = remainder - rhs;
                quotient[byte_idx] |= 1 << bit_in_byte;
            }
        }

        U512(quotient)
    }
}

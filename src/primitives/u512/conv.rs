//! Conversions between `U512` and native integers
//!
//! Widening conversions place the value in the least significant bits.
//! The limb view (`[u64; 8]`) is ordered from most to least significant
//! word, matching the big-endian byte layout.

use crate::primitives::U512;

impl From<U512> for [u64; 8] {
    fn from(value: U512) -> Self {
        let mut out = [0u64; 8];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(8)) {
            *o = chunk.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
        }

        out
    }
}

impl From<[u64; 8]> for U512 {
    fn from(value: [u64; 8]) -> Self {
        let mut out = [0u8; 64];

        for (chunk, v) in out.chunks_exact_mut(8).zip(value) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U512(out)
    }
}

impl From<u32> for U512 {
    fn from(value: u32) -> Self {
        U512::from(value as u128)
    }
}

impl From<u64> for U512 {
    fn from(value: u64) -> Self {
        U512::from(value as u128)
    }
}

impl From<u128> for U512 {
    fn from(value: u128) -> Self {
        let mut out = [0u8; 64];
        out[48..].copy_from_slice(&value.to_be_bytes());
        U512(out)
    }
}

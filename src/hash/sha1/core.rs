//! SHA-1 core hashing functions
//!
//! Implements SHA-1 as defined in FIPS 180-4 §6.1: a 5-word state folded
//! over 512-bit blocks in 80 rounds.
//!
//! The round constants come from `constants::sha1_round_constants`, which
//! derives them from square roots rather than listing them.

use super::computations::{all_rounds, schedule};
use crate::constants::{sha1_initialization_vector, sha1_round_constants};
use crate::hash::output;
use crate::hash::padding::{Block, pad};

/// Compresses a single 512-bit block into `state`.
pub fn compress(state: &mut [u32; 5], block: &Block<u32>) {
    let w = schedule(block);

    all_rounds(state, &w, sha1_round_constants());
}

/// Computes the SHA-1 digest of `input`.
///
/// # Panics
/// Panics if `input` is 2^61 bytes or longer, the limit of SHA-1's 64-bit
/// length field.
pub fn sha1(input: &[u8]) -> [u8; 20] {
    let mut state = sha1_initialization_vector();

    for block in pad::<u32>(input) {
        compress(&mut state, &block);
    }

    output::digest_array(&state)
}

//! SHA-2 core hashing functions
//!
//! One compression pipeline serves the whole SHA-2 family, parametrized by
//! word width (`u32` or `u64`) through the `Word` trait:
//!
//! | Algorithm   | Word  | Rounds | IV                   | Digest |
//! |-------------|-------|--------|----------------------|--------|
//! | SHA-224     | `u32` | 64     | SHA-224              | 28     |
//! | SHA-256     | `u32` | 64     | SHA-256              | 32     |
//! | SHA-384     | `u64` | 80     | SHA-384              | 48     |
//! | SHA-512     | `u64` | 80     | SHA-512              | 64     |
//! | SHA-512/t   | `u64` | 80     | derived per t        | ⌈t/8⌉  |
//!
//! The truncated variants differ from their full-width counterparts only by
//! initialization vector and output length.

use super::computations::{all_rounds, schedule};
use crate::constants::{
    sha224_initialization_vector, sha256_initialization_vector, sha256_round_constants,
    sha384_initialization_vector, sha512_initialization_vector, sha512_round_constants,
};
use crate::hash::output;
use crate::hash::padding::{Block, pad};
use crate::primitives::Word;

/// Compresses a single block into `state`.
///
/// # Parameters
/// - `state`: the running hash value (8 words)
/// - `block`: sixteen big-endian message words
/// - `constants`: the round constants; one round runs per constant, up to
///   `W::ROUNDS`
pub fn compress<W: Word>(state: &mut [W; 8], block: &Block<W>, constants: &[W]) {
    debug_assert_eq!(constants.len(), W::ROUNDS);

    let w = schedule(block);

    all_rounds(state, &w, constants);
}

/// Pads `message` and folds every block, in order, into a state starting at
/// `iv`. Returns the final state.
///
/// # Panics
/// Panics if the message is too long for the length field (only reachable
/// for 32-bit words, at 2^61 bytes).
pub fn hash_blocks<W: Word>(iv: [W; 8], constants: &[W], message: &[u8]) -> [W; 8] {
    let mut state = iv;

    for block in pad::<W>(message) {
        compress(&mut state, &block, constants);
    }

    state
}

/// Computes the SHA-224 digest of `input`.
pub fn sha224(input: &[u8]) -> [u8; 28] {
    let state = hash_blocks(
        sha224_initialization_vector(),
        sha256_round_constants(),
        input,
    );

    output::digest_array(&state)
}

/// Computes the SHA-256 digest of `input`.
pub fn sha256(input: &[u8]) -> [u8; 32] {
    let state = hash_blocks(
        sha256_initialization_vector(),
        sha256_round_constants(),
        input,
    );

    output::digest_array(&state)
}

/// Computes the SHA-384 digest of `input`.
pub fn sha384(input: &[u8]) -> [u8; 48] {
    let state = hash_blocks(
        sha384_initialization_vector(),
        sha512_round_constants(),
        input,
    );

    output::digest_array(&state)
}

/// Computes the SHA-512 digest of `input`.
///
/// The message length is encoded as a 128-bit big-endian integer, so every
/// addressable message is accepted.
pub fn sha512(input: &[u8]) -> [u8; 64] {
    let state = hash_blocks(
        sha512_initialization_vector(),
        sha512_round_constants(),
        input,
    );

    output::digest_array(&state)
}

//! Message preprocessing (FIPS 180-4 §5.1 and §5.2)
//!
//! A message is extended with a single `1` bit, then zero bits, then its
//! length in bits as a big-endian integer filling the last two words of the
//! final block. The padded message is the shortest whole number of blocks
//! that fits all three, parsed into blocks of sixteen big-endian words.
//!
//! Only whole-byte messages are supported, so the `1` bit is always the
//! byte `0x80`.
//!
//! The length field is two words wide: 64 bits for 32-bit words and 128 bits
//! for 64-bit words. The 128-bit field is filled from a `u128` bit count, so
//! no addressable message can overflow it. A 64-bit field caps messages at
//! 2^61 bytes; longer ones are rejected, never silently wrapped.

use crate::error::ShaError;
use crate::primitives::Word;

/// Sixteen words of message.
pub type Block<W> = [W; 16];

/// Size of one block in bytes (64 for 32-bit words, 128 for 64-bit words).
pub const fn block_len<W: Word>() -> usize {
    16 * W::BYTES
}

/// Size of the trailing length field in bytes.
pub const fn length_field_len<W: Word>() -> usize {
    2 * W::BYTES
}

/// Checks that a message of `len` bytes can be length-encoded.
pub fn check_length<W: Word>(len: usize) -> Result<(), ShaError> {
    let field_bits = 8 * length_field_len::<W>() as u32;
    let bit_len = (len as u128) << 3;

    if field_bits < u128::BITS && bit_len >> field_bits != 0 {
        return Err(ShaError::MessageTooLong { bytes: len });
    }

    Ok(())
}

/// Number of blocks a message of `len` bytes pads to.
///
/// The smallest `k` with `k · block_len ≥ len + 1 + length_field_len`.
pub fn block_count<W: Word>(len: usize) -> usize {
    let needed = len as u128 + 1 + length_field_len::<W>() as u128;

    needed.div_ceil(block_len::<W>() as u128) as usize
}

/// Pads `message` and splits it into blocks of big-endian words.
///
/// # Panics
/// Panics if the message is too long for the length field (see
/// [`check_length`]); only possible for 32-bit words and messages of
/// 2^61 bytes or more.
pub fn pad<W: Word>(message: &[u8]) -> Vec<Block<W>> {
    let len = message.len();

    if let Err(err) = check_length::<W>(len) {
        panic!("{err}");
    }

    let total = block_count::<W>(len) * block_len::<W>();
    let field_len = length_field_len::<W>();

    let mut bytes = Vec::with_capacity(total);
    bytes.extend_from_slice(message);
    bytes.push(0x80);
    bytes.resize(total - field_len, 0);

    let bit_len = ((len as u128) << 3).to_be_bytes();
    bytes.extend_from_slice(&bit_len[bit_len.len() - field_len..]);

    bytes
        .chunks_exact(block_len::<W>())
        .map(|chunk| {
            let mut block = [W::default(); 16];

            for (word, bytes) in block.iter_mut().zip(chunk.chunks_exact(W::BYTES)) {
                *word = W::from_be_slice(bytes);
            }

            block
        })
        .collect()
}

//! Digest serialization and truncation
//!
//! The final state is written word by word, most significant byte first.
//! Truncated variants (SHA-224, SHA-384, SHA-512/t) keep only the leading
//! bytes of that serialization; they never re-derive or pad anything.

use crate::primitives::Word;

/// Serializes `state` as big-endian bytes, words in state order.
pub fn to_be_bytes<W: Word>(state: &[W]) -> Vec<u8> {
    let mut out = Vec::with_capacity(state.len() * W::BYTES);

    for &word in state {
        word.extend_be(&mut out);
    }

    out
}

/// Serializes `state` and keeps its leading `N` bytes.
///
/// # Panics
/// Panics if `N` exceeds the serialized state size.
pub fn digest_array<W: Word, const N: usize>(state: &[W]) -> [u8; N] {
    let bytes = to_be_bytes(state);

    assert!(N <= bytes.len(), "digest longer than the hash state");

    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);

    out
}

/// Keeps the leftmost `bits` bits of `bytes`.
///
/// Returns `⌈bits / 8⌉` bytes; when `bits` is not a multiple of eight the
/// unused low bits of the last byte are cleared.
///
/// # Panics
/// Panics if `bits` exceeds `8 · bytes.len()`.
pub fn truncate_bits(bytes: &[u8], bits: usize) -> Vec<u8> {
    assert!(bits <= bytes.len() * 8, "truncation cannot lengthen a digest");

    let len = bits.div_ceil(8);
    let mut out = bytes[..len].to_vec();

    let spare = len * 8 - bits;
    if let Some(last) = out.last_mut() {
        *last &= 0xFFu8 << spare;
    }

    out
}

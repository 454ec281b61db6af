//! Errors reported by the hashing API.
//!
//! Every error here is a configuration or precondition fault detected
//! before any block is processed. Once a computation is accepted it
//! always runs to completion.

use std::fmt::{Display, Formatter, Result};

/// Errors that can occur when configuring or starting a hash computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShaError {
    /// SHA-512/t requested with t = 0, t = 384 (reserved for SHA-384),
    /// or t ≥ 512.
    InvalidTruncation(usize),
    /// The message bit length does not fit in the algorithm's length field.
    MessageTooLong {
        /// Length of the rejected message in bytes.
        bytes: usize,
    },
    /// An algorithm name that does not denote a SHA-1 or SHA-2 variant.
    UnknownAlgorithm(String),
}

impl Display for ShaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ShaError::InvalidTruncation(bits) => {
                write!(f, "invalid SHA-512/t truncation length: {bits} bits")
            }
            ShaError::MessageTooLong { bytes } => {
                write!(f, "message of {bytes} bytes is too long to length-encode")
            }
            ShaError::UnknownAlgorithm(name) => write!(f, "unknown algorithm: {name:?}"),
        }
    }
}

impl std::error::Error for ShaError {}

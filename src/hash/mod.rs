//! Hash algorithms exposed by the crate.
//!
//! All of SHA-1 and SHA-2 from FIPS 180-4: SHA-1, SHA-224, SHA-256,
//! SHA-384, SHA-512 and SHA-512/t. Each is a single-shot function from a
//! byte message to a fixed-length digest.
//!
//! [`digest`] selects the algorithm at run time through [`Algorithm`] and
//! reports configuration problems as [`ShaError`] before hashing starts.

mod logic;

pub mod output;
pub mod padding;
pub mod sha1;
pub mod sha2;
pub mod sha512t;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ShaError;

pub use self::logic::{choose, majority, parity};
pub use self::sha1::sha1;
pub use self::sha2::{sha224, sha256, sha384, sha512};
pub use self::sha512t::{Truncation, sha512_224, sha512_256, sha512_t};

/// A SHA-1 or SHA-2 algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512t(Truncation),
}

impl Algorithm {
    /// Every algorithm with a fixed name, SHA-512/224 and SHA-512/256
    /// included.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha512t(Truncation::SHA512_224),
        Algorithm::Sha512t(Truncation::SHA512_256),
    ];

    /// Digest length in bits.
    pub fn digest_bits(self) -> usize {
        match self {
            Algorithm::Sha1 => 160,
            Algorithm::Sha224 => 224,
            Algorithm::Sha256 => 256,
            Algorithm::Sha384 => 384,
            Algorithm::Sha512 => 512,
            Algorithm::Sha512t(t) => t.bits(),
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(self) -> usize {
        self.digest_bits().div_ceil(8)
    }

    /// Word width in bits (32 or 64).
    pub fn word_bits(self) -> u32 {
        match self {
            Algorithm::Sha1 | Algorithm::Sha224 | Algorithm::Sha256 => u32::BITS,
            _ => u64::BITS,
        }
    }

    /// Block size in bytes (64 or 128).
    pub fn block_len(self) -> usize {
        if self.word_bits() == u32::BITS {
            padding::block_len::<u32>()
        } else {
            padding::block_len::<u64>()
        }
    }

    /// Checks that a message of `len` bytes can be hashed.
    pub fn check_length(self, len: usize) -> Result<(), ShaError> {
        if self.word_bits() == u32::BITS {
            padding::check_length::<u32>(len)
        } else {
            padding::check_length::<u64>(len)
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Sha1 => f.write_str("SHA-1"),
            Algorithm::Sha224 => f.write_str("SHA-224"),
            Algorithm::Sha256 => f.write_str("SHA-256"),
            Algorithm::Sha384 => f.write_str("SHA-384"),
            Algorithm::Sha512 => f.write_str("SHA-512"),
            Algorithm::Sha512t(t) => Display::fmt(t, f),
        }
    }
}

/// Parses names such as `SHA-256`, `sha256` or `SHA-512/224`.
///
/// Case and dashes are ignored. `SHA-512/t` goes through
/// [`Truncation::new`], so `SHA-512/384` is rejected.
impl FromStr for Algorithm {
    type Err = ShaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase().replace('-', "");

        match name.as_str() {
            "SHA1" => return Ok(Algorithm::Sha1),
            "SHA224" => return Ok(Algorithm::Sha224),
            "SHA256" => return Ok(Algorithm::Sha256),
            "SHA384" => return Ok(Algorithm::Sha384),
            "SHA512" => return Ok(Algorithm::Sha512),
            _ => {}
        }

        let bits = name
            .strip_prefix("SHA512/")
            .and_then(|t| t.parse::<usize>().ok())
            .ok_or_else(|| ShaError::UnknownAlgorithm(s.to_string()))?;

        Ok(Algorithm::Sha512t(Truncation::new(bits)?))
    }
}

/// Computes the digest of `message` with `algorithm`.
///
/// # Errors
/// Returns [`ShaError::MessageTooLong`] before hashing if the message cannot
/// be length-encoded by the algorithm.
pub fn digest(algorithm: Algorithm, message: &[u8]) -> Result<Vec<u8>, ShaError> {
    algorithm.check_length(message.len())?;

    let out = match algorithm {
        Algorithm::Sha1 => sha1(message).to_vec(),
        Algorithm::Sha224 => sha224(message).to_vec(),
        Algorithm::Sha256 => sha256(message).to_vec(),
        Algorithm::Sha384 => sha384(message).to_vec(),
        Algorithm::Sha512 => sha512(message).to_vec(),
        Algorithm::Sha512t(t) => t.hash(message),
    };

    Ok(out)
}

//! SHA-224, SHA-256, SHA-384 and SHA-512 (FIPS 180-4 §6.2 to §6.5).

pub mod computations;
pub mod core;

pub use self::core::{compress, hash_blocks, sha224, sha256, sha384, sha512};

//! SHA-1 (FIPS 180-4 §6.1).

pub mod computations;
pub mod core;

pub use self::core::{compress, sha1};

//! SHA-1 and SHA-2 digests with derived constants
//!
//! This crate computes the FIPS 180-4 hash functions (SHA-1, SHA-224,
//! SHA-256, SHA-384, SHA-512 and SHA-512/t) without a single hardcoded
//! SHA-2 constant table. Round constants and initialization vectors are
//! computed from first principles on first use: primes by trial division,
//! then the fractional bits of their square and cube roots by
//! extended-precision Newton–Raphson iteration.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `Word` abstraction over 32-bit and 64-bit SHA words, and `U512`,
//!   a fixed-size integer used as the fixed-point carrier for root
//!   extraction.
//!
//! - `constants`
//!   Prime generation, root extraction, and the derived round constant and
//!   initialization vector tables. Tables are computed once and shared
//!   read-only afterwards.
//!
//! - `hash`
//!   Message padding, the SHA-1 and generic SHA-2 compression pipelines,
//!   digest serialization and truncation, and the SHA-512/t IV bootstrap.
//!   Also the run-time `Algorithm` selector and `digest` entry point.
//!
//! - `error`
//!   `ShaError`, raised for configuration faults (an invalid SHA-512/t
//!   length, an unknown algorithm name, an over-long message) before any
//!   hashing work begins.
//!
//! # Design goals
//!
//! - Every hash call is a pure function of its input
//! - Constants are derived, never pasted
//! - Single-shot hashing only; no streaming state
//! - No runtime dependencies
//!
//! This crate is not hardened against timing side channels and is not tuned
//! for speed. It favors showing where every number comes from.

pub mod constants;
pub mod error;
pub mod hash;
pub mod primitives;

pub use error::ShaError;
pub use hash::{
    Algorithm, Truncation, digest, sha1, sha224, sha256, sha384, sha512, sha512_224, sha512_256,
    sha512_t,
};

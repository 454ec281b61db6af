//! 512-bit unsigned integer primitive
//!
//! `U512` is a low-level, dependency-free fixed-width integer rather than
//! a full big-integer abstraction. It provides only what the root
//! extraction in `constants::roots` needs: wrapping `+ - *`, long division,
//! shifts and comparisons.
//!
//! The internal representation is big-endian and remains stable across
//! all operations and conversions.

mod conv;
mod core;
mod ops;

/// Fixed-size 512-bit unsigned integer.
pub use self::core::U512;

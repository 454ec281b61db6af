//! Primitive types
//!
//! Low-level building blocks shared by constant derivation and hashing:
//! - `Word`: the 32-bit / 64-bit SHA word abstraction
//! - `U512`: a fixed-size 512-bit unsigned integer used as an
//!   extended-precision fixed-point carrier
//!
//! Both are simple and dependency-free, with well-defined wrapping
//! semantics.

mod u512;
mod word;

pub use u512::U512;
pub use word::Word;

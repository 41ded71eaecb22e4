//! Finite-field arithmetic over generated big primes.
//!
//! This crate provides the arithmetic engine for threshold secret sharing:
//! primality testing and prime generation, secure random field elements,
//! modular inverses, and polynomial evaluation / Lagrange interpolation over
//! `Z_p` for an arbitrary-precision prime `p`.

pub mod error;
pub mod modular;
pub mod poly;
pub mod prelude;
pub mod prime;
pub mod random;

pub use error::{MathError, Result};

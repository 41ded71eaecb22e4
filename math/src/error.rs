use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Errors produced by the big-field arithmetic primitives.
#[derive(Debug, Error)]
pub enum MathError {
    /// The requested modular inverse does not exist; over a prime modulus
    /// this means the operand was a multiple of the modulus.
    #[error("modular inverse does not exist")]
    NoInverse,
    /// The cryptographically secure random source could not be read. This is
    /// fatal: there is no safe non-cryptographic fallback.
    #[error("secure random source unavailable")]
    RandomSource(#[source] rand::Error),
}

use thiserror::Error;

use math::MathError;

/// Result type specialized for secret-sharing operations.
pub type Result<T> = std::result::Result<T, SharingError>;

/// Errors that can arise while splitting or reconstructing a secret.
///
/// None of these are retried internally: malformed input cannot succeed on
/// retry, and a failing secure random source must never be silently
/// downgraded.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SharingError {
    #[error("invalid threshold configuration: threshold {threshold} must lie in 1..={share_count}")]
    InvalidThreshold {
        threshold: usize,
        share_count: usize,
    },
    #[error(
        "invalid secret: {bit_length} bits exceeds the {max} bit limit",
        max = crate::params::MAX_SECRET_BITS
    )]
    InvalidSecret { bit_length: u64 },
    #[error("invalid secret encoding")]
    InvalidEncoding,
    #[error("invalid share index {0}: x = 0 is reserved for the secret")]
    InvalidShareIndex(u32),
    #[error("insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("shares do not agree on a field prime")]
    MismatchedPrimes,
    #[error("duplicate x coordinates among shares")]
    SingularShares,
    #[error("reconstructed value failed the integrity check")]
    IntegrityCheckFailed,
    #[error("secure random source unavailable")]
    RandomUnavailable(#[source] rand::Error),
}

impl From<MathError> for SharingError {
    fn from(err: MathError) -> Self {
        match err {
            // An inverse only vanishes when two shares repeat an x value.
            MathError::NoInverse => SharingError::SingularShares,
            MathError::RandomSource(source) => SharingError::RandomUnavailable(source),
        }
    }
}

//! Sharing parameters and their validation.

use serde::{Deserialize, Serialize};

use math::prime::MillerRabin;

use crate::error::{Result, SharingError};

/// Bit length of freshly generated secrets.
pub const DEFAULT_SECRET_BITS: u64 = 256;

/// Upper bound on the bit length of any secret or field element.
pub const MAX_SECRET_BITS: u64 = 4096;

/// Default Miller–Rabin witness count used when generating field primes.
pub const DEFAULT_PRIMALITY_ROUNDS: u32 = MillerRabin::DEFAULT_ROUNDS;

/// Validated sharing parameters: any `threshold` of `share_count` shares
/// reconstruct the secret.
///
/// This replaces open-ended keyword-option constructors with a fixed shape
/// checked once, at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharingConfig {
    threshold: usize,
    share_count: usize,
    primality_rounds: u32,
}

impl SharingConfig {
    /// Create a configuration for `threshold`-of-`share_count` sharing.
    ///
    /// A threshold of 1 is degenerate but supported: every share then equals
    /// the secret itself.
    pub fn new(threshold: usize, share_count: usize) -> Result<Self> {
        if !validate_threshold_config(threshold, share_count) {
            return Err(SharingError::InvalidThreshold {
                threshold,
                share_count,
            });
        }

        Ok(SharingConfig {
            threshold,
            share_count,
            primality_rounds: DEFAULT_PRIMALITY_ROUNDS,
        })
    }

    /// Override the primality-test witness count.
    ///
    /// This is a security parameter, not a performance knob; lowering it
    /// weakens the bound on accepting a composite field modulus.
    pub fn with_primality_rounds(mut self, rounds: u32) -> Self {
        self.primality_rounds = rounds;
        self
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn share_count(&self) -> usize {
        self.share_count
    }

    pub fn primality_rounds(&self) -> u32 {
        self.primality_rounds
    }
}

/// A configuration is usable when the threshold lies in `1..=share_count`.
pub fn validate_threshold_config(threshold: usize, share_count: usize) -> bool {
    threshold >= 1 && threshold <= share_count
}

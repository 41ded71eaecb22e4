//! Orchestration of the split and reconstruct directions.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use math::{
    poly::{lagrange_interpolate_at_zero, Polynomial},
    prime::{smallest_prime_of_bit_length, MillerRabin},
};

use crate::{
    error::{Result, SharingError},
    params::{SharingConfig, DEFAULT_SECRET_BITS},
    secret::Secret,
    share::Share,
};

/// The output of a split: the distributable shares plus the tag a later
/// reconstruction must be checked against.
///
/// How the tag travels is up to the caller; each share also carries it as
/// its `tag_fragment` for transports that only move shares.
#[derive(Clone, Debug)]
pub struct SplitSecret {
    pub shares: Vec<Share>,
    pub integrity_tag: Vec<u8>,
}

/// Splits a [`Secret`] into shares and reconstructs it from a quorum.
///
/// The engine is stateless between calls: splitting evaluates one ephemeral
/// polynomial and drops it, and reconstruction is a single aggregate
/// computation over the supplied shares.
#[derive(Clone, Copy, Debug)]
pub struct SecretSharing {
    config: SharingConfig,
}

impl SecretSharing {
    pub fn new(config: SharingConfig) -> Self {
        SecretSharing { config }
    }

    pub fn config(&self) -> &SharingConfig {
        &self.config
    }

    /// Split `secret` into the configured number of shares.
    ///
    /// The field prime is the smallest prime above `2^w + 1` where `w` is at
    /// least the secret's width, so the secret is always a proper field
    /// element. The sharing polynomial is evaluated at `x = 1..=n` and
    /// dropped as soon as the shares exist.
    pub fn split<R>(&self, secret: &Secret, rng: &mut R) -> Result<SplitSecret>
    where
        R: RngCore + CryptoRng,
    {
        let prime_bits = secret.bit_length().max(DEFAULT_SECRET_BITS);
        let test = MillerRabin::new(self.config.primality_rounds());
        let prime = smallest_prime_of_bit_length(prime_bits, &test, rng);

        let polynomial =
            Polynomial::with_secret(secret.value(), self.config.threshold(), &prime, rng)?;

        let integrity_tag = secret.integrity_tag();
        let fragment = hex::encode(&integrity_tag);

        let mut shares = Vec::with_capacity(self.config.share_count());
        for x in 1..=self.config.share_count() {
            let y = polynomial.evaluate(&BigUint::from(x));
            let share = Share::new(x as u32, y, prime.clone())?
                .with_tag_fragment(fragment.clone());
            shares.push(share);
        }

        Ok(SplitSecret {
            shares,
            integrity_tag,
        })
    }

    /// Recover the sharing polynomial's value at zero from `shares`.
    ///
    /// Fewer shares than the threshold are rejected outright. A quorum of
    /// wrong or corrupted shares still interpolates to *some* field element;
    /// only [`reconstruct_verified`](Self::reconstruct_verified) can tell
    /// that apart from the original secret.
    pub fn reconstruct(&self, shares: &[Share]) -> Result<Secret> {
        if shares.len() < self.config.threshold() {
            return Err(SharingError::InsufficientShares {
                required: self.config.threshold(),
                provided: shares.len(),
            });
        }

        let active = &shares[..self.config.threshold()];
        let prime = active[0].prime();
        if active.iter().any(|share| share.prime() != prime) {
            return Err(SharingError::MismatchedPrimes);
        }

        let points: Vec<(BigUint, BigUint)> = active
            .iter()
            .map(|share| (BigUint::from(share.x()), share.y().clone()))
            .collect();

        let value = lagrange_interpolate_at_zero(&points, prime)?;
        Secret::from_value(value)
    }

    /// Reconstruct and verify the result against the tag produced at split
    /// time, failing with [`SharingError::IntegrityCheckFailed`] when the
    /// recovered value is not the original secret.
    pub fn reconstruct_verified(
        &self,
        shares: &[Share],
        expected_tag: &[u8],
    ) -> Result<Secret> {
        let secret = self.reconstruct(shares)?;
        if !secret.verify_integrity(expected_tag) {
            return Err(SharingError::IntegrityCheckFailed);
        }
        Ok(secret)
    }
}

//! The value being protected, with validation, portable encoding, and the
//! integrity tag used to recognize a correct reconstruction.

use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};

use math::random::try_random_of_bit_length;

use crate::{
    encoding::{decode_biguint, encode_biguint},
    error::{Result, SharingError},
    params::{DEFAULT_SECRET_BITS, MAX_SECRET_BITS},
};

type HmacSha256 = Hmac<Sha256>;

/// A validated field element to be split into shares.
///
/// The integrity tag is derived from the current value on every call rather
/// than cached, so it can never drift out of sync with the value.
#[derive(Clone, Debug, Eq)]
pub struct Secret {
    value: BigUint,
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Secret {
    /// Generate a fresh random secret of [`DEFAULT_SECRET_BITS`] bits.
    pub fn random<R>(rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        Self::random_of_bit_length(rng, DEFAULT_SECRET_BITS)
    }

    /// Generate a random secret occupying exactly `bit_length` bits.
    ///
    /// The top bit is forced set so the secret always spans the requested
    /// width. Fails with [`SharingError::RandomUnavailable`] if the secure
    /// source cannot be read; there is no non-cryptographic fallback.
    pub fn random_of_bit_length<R>(rng: &mut R, bit_length: u64) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        if bit_length == 0 || bit_length > MAX_SECRET_BITS {
            return Err(SharingError::InvalidSecret { bit_length });
        }
        // Forcing bit `bit_length - 1` yields exactly `bit_length` bits.
        let value = try_random_of_bit_length(rng, bit_length - 1)?;
        Self::from_value(value)
    }

    /// Wrap an explicit non-negative integer, enforcing the bit-length cap.
    pub fn from_value(value: BigUint) -> Result<Self> {
        let bit_length = value.bits();
        if bit_length > MAX_SECRET_BITS {
            return Err(SharingError::InvalidSecret { bit_length });
        }
        Ok(Secret { value })
    }

    /// Decode a secret from its portable encoded form.
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        Self::from_value(decode_biguint(encoded)?)
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn bit_length(&self) -> u64 {
        self.value.bits()
    }

    /// Canonical portable form: base-36 digits wrapped in URL-safe base-64.
    pub fn encode(&self) -> String {
        encode_biguint(&self.value)
    }

    /// Keyed digest binding a tag to this secret's value.
    ///
    /// The HMAC-SHA256 key is the decimal rendering of the value and the
    /// message is the SHA-256 digest of that same rendering. A reconstruction
    /// re-derives the tag from its candidate value and compares it against
    /// the tag that travelled with the shares, so the secret itself never has
    /// to travel for verification.
    pub fn integrity_tag(&self) -> Vec<u8> {
        self.keyed_digest().finalize().into_bytes().to_vec()
    }

    /// Check a candidate tag against the tag derived from the current value.
    ///
    /// The comparison is constant-time. A mismatch after reconstruction means
    /// the shares were wrong, corrupted, or fewer than the threshold.
    pub fn verify_integrity(&self, candidate_tag: &[u8]) -> bool {
        self.keyed_digest().verify_slice(candidate_tag).is_ok()
    }

    fn keyed_digest(&self) -> HmacSha256 {
        let representation = self.value.to_str_radix(10);
        let digest = Sha256::digest(representation.as_bytes());
        let mut mac = HmacSha256::new_from_slice(representation.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(&digest);
        mac
    }
}

//! Secure random field-element generation.
//!
//! All helpers take a caller-supplied generator bounded by
//! `RngCore + CryptoRng`, so production code runs against the OS source
//! (`rand::rngs::OsRng`) while tests inject a seeded `StdRng`.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{MathError, Result};

/// Draw a random integer with the bit at index `bit_length` forced set.
///
/// `ceil(bit_length / 8)` bytes are drawn, masked down to `bit_length` bits,
/// and then bit `bit_length` is set, so the result always lands in
/// `[2^bit_length, 2^(bit_length+1))` and never degenerates into a short or
/// predictable value.
///
/// Panics if the random source fails; use [`try_random_of_bit_length`] where
/// the failure must be surfaced as an error instead.
pub fn random_of_bit_length<R>(rng: &mut R, bit_length: u64) -> BigUint
where
    R: RngCore + CryptoRng,
{
    let mut bytes = vec![0u8; byte_length(bit_length)];
    rng.fill_bytes(&mut bytes);
    assemble(&bytes, bit_length)
}

/// Fallible variant of [`random_of_bit_length`].
///
/// A failing source is reported as [`MathError::RandomSource`]; there is
/// deliberately no fallback to a non-cryptographic generator.
pub fn try_random_of_bit_length<R>(rng: &mut R, bit_length: u64) -> Result<BigUint>
where
    R: RngCore + CryptoRng,
{
    let mut bytes = vec![0u8; byte_length(bit_length)];
    rng.try_fill_bytes(&mut bytes)
        .map_err(MathError::RandomSource)?;
    Ok(assemble(&bytes, bit_length))
}

/// Uniform random integer in `[0, bound)` by rejection sampling.
///
/// The draw is trimmed to the bound's bit width, so each attempt succeeds
/// with probability at least one half.
pub fn random_below<R>(rng: &mut R, bound: &BigUint) -> BigUint
where
    R: RngCore + CryptoRng,
{
    debug_assert!(!bound.is_zero());

    let bits = bound.bits();
    let byte_len = byte_length(bits);
    let excess = (byte_len as u64 * 8).saturating_sub(bits);

    loop {
        let mut bytes = vec![0u8; byte_len];
        rng.fill_bytes(&mut bytes);
        let value = BigUint::from_bytes_be(&bytes) >> excess;
        if &value < bound {
            return value;
        }
    }
}

fn byte_length(bit_length: u64) -> usize {
    ((bit_length + 7) / 8) as usize
}

fn assemble(bytes: &[u8], bit_length: u64) -> BigUint {
    let mut value = BigUint::from_bytes_be(bytes);
    value &= (BigUint::one() << bit_length) - 1u32;
    value.set_bit(bit_length, true);
    value
}

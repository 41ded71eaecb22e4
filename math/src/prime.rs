//! Probabilistic primality testing and field-prime generation.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::random::random_below;

/// Primes below 256, used to screen candidates before the witness loop.
const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67,
    71, 73, 79, 83, 89, 97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149,
    151, 157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223, 227,
    229, 233, 239, 241, 251,
];

/// Trait for algorithms that test whether a big integer is prime.
///
/// The seam exists so an alternate arbitrary-precision backend (or a
/// deterministic test in a fixture) can be swapped in without touching the
/// prime-generation code.
pub trait PrimalityTest {
    /// Test whether `candidate` is prime, drawing any witnesses from `rng`.
    fn is_probable_prime<R>(&self, candidate: &BigUint, rng: &mut R) -> bool
    where
        R: RngCore + CryptoRng;
}

/// Miller–Rabin test with a configurable number of random-base witnesses.
///
/// The default of 20 rounds bounds the false-positive probability below
/// 2^-40 and matches the defaults of common CLI prime-generation tools. The
/// round count is a security parameter: lower it only with a reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MillerRabin {
    rounds: u32,
}

impl MillerRabin {
    pub const DEFAULT_ROUNDS: u32 = 20;

    pub fn new(rounds: u32) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The witness loop proper; assumes `candidate` survived the small-prime
    /// screen, i.e. it is odd and larger than every screened prime.
    fn witness_rounds<R>(&self, candidate: &BigUint, rng: &mut R) -> bool
    where
        R: RngCore + CryptoRng,
    {
        let one = BigUint::one();
        let two = BigUint::from(2u32);
        let n_minus_one = candidate - &one;

        // candidate - 1 = d * 2^s with d odd
        let mut d = n_minus_one.clone();
        let mut s = 0u64;
        while !d.bit(0) {
            d >>= 1;
            s += 1;
        }

        let witness_range = candidate - BigUint::from(4u32);
        for _ in 0..self.rounds {
            // witness in [2, candidate - 2]
            let a = random_below(rng, &witness_range) + &two;
            let mut x = a.modpow(&d, candidate);
            if x == one || x == n_minus_one {
                continue;
            }

            let mut composite = true;
            for _ in 1..s {
                x = x.modpow(&two, candidate);
                if x == n_minus_one {
                    composite = false;
                    break;
                }
            }
            if composite {
                return false;
            }
        }

        true
    }
}

impl Default for MillerRabin {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROUNDS)
    }
}

impl PrimalityTest for MillerRabin {
    fn is_probable_prime<R>(&self, candidate: &BigUint, rng: &mut R) -> bool
    where
        R: RngCore + CryptoRng,
    {
        match screen_small_primes(candidate) {
            Some(verdict) => verdict,
            None => self.witness_rounds(candidate, rng),
        }
    }
}

/// Trial division by [`SMALL_PRIMES`]. Returns a definite verdict when the
/// candidate is small or has a small factor, `None` otherwise.
fn screen_small_primes(candidate: &BigUint) -> Option<bool> {
    if *candidate < BigUint::from(2u32) {
        return Some(false);
    }
    for small in SMALL_PRIMES {
        let small = BigUint::from(small);
        if *candidate == small {
            return Some(true);
        }
        if (candidate % &small).is_zero() {
            return Some(false);
        }
    }
    None
}

/// Find the smallest probable prime `>= 2^bit_length + 1`.
///
/// The starting candidate is odd and the step of 2 keeps it odd. There is no
/// iteration cap; prime density makes the search terminate quickly, but a
/// single trial is never assumed to suffice. The result is deterministic for
/// a given bit length up to the (overwhelming) accuracy of the test.
pub fn smallest_prime_of_bit_length<T, R>(
    bit_length: u64,
    test: &T,
    rng: &mut R,
) -> BigUint
where
    T: PrimalityTest,
    R: RngCore + CryptoRng,
{
    let mut candidate = (BigUint::one() << bit_length) + BigUint::one();
    let two = BigUint::from(2u32);
    while !test.is_probable_prime(&candidate, rng) {
        candidate += &two;
    }
    candidate
}

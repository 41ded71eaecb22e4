//! Sharing polynomials over `Z_p` and Lagrange interpolation at zero.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::{
    error::Result,
    modular::mod_inverse,
    random::try_random_of_bit_length,
};

/// A polynomial over the prime field `Z_p`.
///
/// Coefficient 0 carries the protected value; every other coefficient is a
/// random field element. Instances are ephemeral: they exist only long
/// enough to be evaluated at the share indices and are never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
    prime: BigUint,
}

impl Polynomial {
    /// Build a degree `threshold - 1` polynomial whose constant term is
    /// `secret`, with the remaining coefficients drawn from `rng` and
    /// reduced modulo `prime`.
    ///
    /// A threshold of 1 produces the constant polynomial: every evaluation
    /// equals the secret and no actual splitting happens.
    pub fn with_secret<R>(
        secret: &BigUint,
        threshold: usize,
        prime: &BigUint,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        let coefficient_bits = prime.bits().saturating_sub(1);
        let mut coefficients = Vec::with_capacity(threshold);
        coefficients.push(secret % prime);
        for _ in 1..threshold {
            let coefficient = try_random_of_bit_length(rng, coefficient_bits)?;
            coefficients.push(coefficient % prime);
        }

        Ok(Self {
            coefficients,
            prime: prime.clone(),
        })
    }

    /// Wrap explicit coefficients, reducing each modulo `prime`.
    pub fn from_coefficients(coefficients: Vec<BigUint>, prime: BigUint) -> Self {
        let coefficients = coefficients
            .into_iter()
            .map(|coefficient| coefficient % &prime)
            .collect();
        Self {
            coefficients,
            prime,
        }
    }

    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Number of coefficients, which equals the sharing threshold.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluate at `x` with Horner's rule, `Σ cᵢ·xⁱ mod p`.
    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, coefficient| {
                (acc * x + coefficient) % &self.prime
            })
    }
}

/// Recover the constant term of the unique degree `points.len() - 1`
/// polynomial passing through `points`, i.e. its value at `x = 0`:
///
/// `Σ_j y_j · Π_{i≠j} (−x_i)·(x_j − x_i)^{-1}  (mod prime)`
///
/// Points are consumed in the given order; the result is order-independent
/// but a stable iteration keeps failures reproducible. Duplicate x
/// coordinates zero a denominator and fail with
/// [`MathError::NoInverse`](crate::MathError::NoInverse).
pub fn lagrange_interpolate_at_zero(
    points: &[(BigUint, BigUint)],
    prime: &BigUint,
) -> Result<BigUint> {
    let modulus = BigInt::from(prime.clone());
    let mut accumulator = BigInt::zero();

    for (j, (x_j, y_j)) in points.iter().enumerate() {
        let x_j = BigInt::from(x_j.clone());
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (i, (x_i, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let x_i = BigInt::from(x_i.clone());
            numerator = numerator * -&x_i % &modulus;
            denominator = denominator * (&x_j - &x_i) % &modulus;
        }

        let denominator_inverse = BigInt::from(mod_inverse(&denominator, prime)?);
        let term = BigInt::from(y_j.clone()) * numerator % &modulus
            * denominator_inverse
            % &modulus;
        accumulator = (accumulator + term) % &modulus;
    }

    let value = (accumulator % &modulus + &modulus) % &modulus;
    Ok(value.magnitude().clone())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::error::MathError;

    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn coefficients(values: &[u64]) -> Vec<BigUint> {
        values.iter().copied().map(big).collect()
    }

    mod polynomial_tests {
        use super::*;

        #[test]
        fn test_horner_evaluation() {
            // f(x) = 1 + 2x + 3x^2 over Z_97
            let poly = Polynomial::from_coefficients(coefficients(&[1, 2, 3]), big(97));
            assert_eq!(poly.evaluate(&big(0)), big(1));
            assert_eq!(poly.evaluate(&big(1)), big(6));
            assert_eq!(poly.evaluate(&big(2)), big(17));
            assert_eq!(poly.evaluate(&big(10)), big(321 % 97));
        }

        #[test]
        fn test_coefficients_are_reduced() {
            let poly = Polynomial::from_coefficients(coefficients(&[100, 98]), big(97));
            assert_eq!(poly.coefficients(), &[big(3), big(1)]);
        }

        #[test]
        fn test_with_secret_shape() {
            let mut rng = StdRng::seed_from_u64(1);
            let prime = big(2_305_843_009_213_693_951);
            let secret = big(12_345);
            let poly = Polynomial::with_secret(&secret, 4, &prime, &mut rng).unwrap();

            assert_eq!(poly.threshold(), 4);
            assert_eq!(poly.coefficients()[0], secret);
            assert!(poly.coefficients().iter().all(|c| c < &prime));
        }

        #[test]
        fn test_with_secret_randomness_differs() {
            let mut rng = StdRng::seed_from_u64(2);
            let prime = big(2_305_843_009_213_693_951);
            let secret = big(777);
            let a = Polynomial::with_secret(&secret, 3, &prime, &mut rng).unwrap();
            let b = Polynomial::with_secret(&secret, 3, &prime, &mut rng).unwrap();

            assert_eq!(a.coefficients()[0], b.coefficients()[0]);
            assert_ne!(&a.coefficients()[1..], &b.coefficients()[1..]);
        }

        #[test]
        fn test_threshold_one_is_constant() {
            let mut rng = StdRng::seed_from_u64(3);
            let prime = big(65_537);
            let secret = big(4242);
            let poly = Polynomial::with_secret(&secret, 1, &prime, &mut rng).unwrap();

            assert_eq!(poly.threshold(), 1);
            for x in 1u64..=5 {
                assert_eq!(poly.evaluate(&big(x)), secret);
            }
        }
    }

    mod interpolation_tests {
        use super::*;

        fn sample_points(poly: &Polynomial, xs: &[u64]) -> Vec<(BigUint, BigUint)> {
            xs.iter()
                .map(|&x| (big(x), poly.evaluate(&big(x))))
                .collect()
        }

        #[test]
        fn test_recovers_constant_term() {
            let prime = big(65_537);
            let poly =
                Polynomial::from_coefficients(coefficients(&[12_345, 166, 94]), prime.clone());

            let points = sample_points(&poly, &[1, 3, 5]);
            let value = lagrange_interpolate_at_zero(&points, &prime).unwrap();
            assert_eq!(value, big(12_345));
        }

        #[test]
        fn test_order_independent() {
            let prime = big(65_537);
            let poly =
                Polynomial::from_coefficients(coefficients(&[999, 31, 57, 3]), prime.clone());

            let forward = sample_points(&poly, &[1, 2, 3, 4]);
            let mut backward = forward.clone();
            backward.reverse();

            assert_eq!(
                lagrange_interpolate_at_zero(&forward, &prime).unwrap(),
                lagrange_interpolate_at_zero(&backward, &prime).unwrap(),
            );
        }

        #[test]
        fn test_any_subset_of_sufficient_size() {
            let prime = big(2_305_843_009_213_693_951);
            let poly = Polynomial::from_coefficients(
                coefficients(&[42, 17, 99]),
                prime.clone(),
            );

            for xs in [[1u64, 2, 3], [2, 4, 5], [1, 3, 5]] {
                let points = sample_points(&poly, &xs);
                assert_eq!(
                    lagrange_interpolate_at_zero(&points, &prime).unwrap(),
                    big(42)
                );
            }
        }

        #[test]
        fn test_duplicate_x_fails() {
            let prime = big(65_537);
            let points = vec![(big(1), big(10)), (big(1), big(11)), (big(2), big(12))];
            assert!(matches!(
                lagrange_interpolate_at_zero(&points, &prime),
                Err(MathError::NoInverse)
            ));
        }
    }
}

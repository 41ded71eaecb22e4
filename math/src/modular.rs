//! Modular arithmetic helpers over arbitrary-precision integers.

use std::mem;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::error::{MathError, Result};

/// Compute the multiplicative inverse of `a` modulo `modulus`.
///
/// Negative operands are first brought into `[0, modulus)`. Fails with
/// [`MathError::NoInverse`] when `a` shares a factor with the modulus; over a
/// prime modulus that only happens for `a ≡ 0`.
pub fn mod_inverse(a: &BigInt, modulus: &BigUint) -> Result<BigUint> {
    let m = BigInt::from(modulus.clone());
    let mut a = a % &m;
    if a.sign() == Sign::Minus {
        a += &m;
    }

    let (g, x) = extended_gcd(a, m.clone());
    if !g.is_one() {
        return Err(MathError::NoInverse);
    }

    let inverse = ((x % &m) + &m) % &m;
    Ok(inverse.magnitude().clone())
}

/// Extended Euclidean algorithm, returning `gcd(a, b)` and the Bézout
/// coefficient of `a`.
fn extended_gcd(a: BigInt, b: BigInt) -> (BigInt, BigInt) {
    let (mut s, mut s_last) = (BigInt::zero(), BigInt::one());
    let (mut r, mut r_last) = (b, a);

    while !r.is_zero() {
        let quotient = &r_last / &r;
        r_last -= &quotient * &r;
        s_last -= &quotient * &s;
        mem::swap(&mut r, &mut r_last);
        mem::swap(&mut s, &mut s_last);
    }

    (r_last, s_last)
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_known_inverses() {
        let p = big(17);
        assert_eq!(mod_inverse(&BigInt::from(1), &p).unwrap(), big(1));
        // 2 * 9 = 18 ≡ 1 (mod 17)
        assert_eq!(mod_inverse(&BigInt::from(2), &p).unwrap(), big(9));
        // 5 * 7 = 35 ≡ 1 (mod 17)
        assert_eq!(mod_inverse(&BigInt::from(5), &p).unwrap(), big(7));
    }

    #[test]
    fn test_negative_operand_is_normalized() {
        let p = big(17);
        // -2 ≡ 15 (mod 17) and 15 * 8 = 120 ≡ 1 (mod 17)
        assert_eq!(mod_inverse(&BigInt::from(-2), &p).unwrap(), big(8));
    }

    #[test]
    fn test_zero_has_no_inverse() {
        let p = big(17);
        assert!(matches!(
            mod_inverse(&BigInt::zero(), &p),
            Err(MathError::NoInverse)
        ));
        // Multiples of the modulus reduce to zero.
        assert!(matches!(
            mod_inverse(&BigInt::from(34), &p),
            Err(MathError::NoInverse)
        ));
    }

    #[quickcheck]
    fn prop_inverse_multiplies_to_one(a: u64) -> bool {
        // 2^61 - 1 is prime, so every nonzero residue is invertible.
        let p = BigUint::from(2_305_843_009_213_693_951u64);
        let a = BigInt::from(a % 2_305_843_009_213_693_951u64);
        if a.is_zero() {
            return true;
        }
        let inverse = mod_inverse(&a, &p).unwrap();
        (a.magnitude() * &inverse) % &p == BigUint::one()
    }
}

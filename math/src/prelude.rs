pub use crate::{
    error::{MathError, Result},
    modular::mod_inverse,
    poly::{lagrange_interpolate_at_zero, Polynomial},
    prime::{smallest_prime_of_bit_length, MillerRabin, PrimalityTest},
    random::{random_below, random_of_bit_length, try_random_of_bit_length},
};

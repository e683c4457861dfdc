//! Number-theoretic primitives backing RSA-style key generation over
//! arbitrary-precision integers: greatest common divisor, modular inverse,
//! modular exponentiation, Miller-Rabin primality testing and prime
//! candidate generation.
//!
//! All operations take and return [`num_bigint::BigUint`] values and leave
//! their arguments untouched. Randomness comes from one shared, seedable
//! stream (see [`rng`]), so candidate and witness draws are reproducible
//! under a fixed seed.

pub mod number_theory;
pub mod rng;

pub use number_theory::{
    gcd, is_prime, lcm, make_prime, mod_exp, mod_inverse, Inverse, ModularArithmetic,
    NumTheoryError, Primality, RabinMillerTest,
};

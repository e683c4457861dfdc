use super::modular_arithmetic::ModularArithmetic;
use super::NumTheoryError;
use crate::rng::rng;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};

pub struct RabinMillerTest {
    candidate: BigUint,
    /// candidate - 1 = 2^s * r with r odd
    r: BigUint,
    /// candidate - 1 = 2^s * r with r odd
    s: u64,
    /// candidate - 1, compared against after every squaring
    minus_one: BigUint,
}

pub enum Primality {
    ProbablyPrime,
    Composite,
}

impl Primality {
    pub fn is_probably_prime(&self) -> bool {
        match self {
            Self::ProbablyPrime => true,
            Self::Composite => false,
        }
    }
}

impl RabinMillerTest {
    pub fn new(candidate: BigUint) -> Self {
        let minus_one = if candidate.is_zero() {
            BigUint::zero()
        } else {
            &candidate - 1u32
        };

        // decompose candidate - 1 = 2^s * r; for the candidates the
        // special cases in is_prime don't already settle, minus_one is
        // even and nonzero, so s >= 1 and r comes out odd
        let s = minus_one.trailing_zeros().unwrap_or(0);
        let r = &minus_one >> s;

        RabinMillerTest {
            candidate,
            r,
            s,
            minus_one,
        }
    }

    pub fn into_candidate(self) -> BigUint {
        self.candidate
    }

    /// Determines if self.candidate is a (probable) prime.
    ///
    /// `iterations` is the number of Miller-Rabin rounds; each round a
    /// composite survives has probability at most 1/4, so a false positive
    /// slips through with probability at most (1/4)^iterations. False
    /// negatives never occur.
    pub fn is_prime(&self, iterations: u64) -> Result<bool, NumTheoryError> {
        if iterations == 0 {
            return Err(NumTheoryError::ZeroIterations);
        }

        let two = BigUint::from(2u8);
        let three = BigUint::from(3u8);

        if self.candidate == two || self.candidate == three {
            return Ok(true);
        }
        if self.candidate < two {
            return Ok(false); // 0 and 1
        }
        if !self.candidate.bit(0) {
            return Ok(false); // even, and 2 is already handled
        }

        for _ in 0..iterations {
            let a = self.draw_witness();

            if !self.test_once(&a).is_probably_prime() {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Do one round of the Rabin-Miller test using the witness `a`.
    /// Assumes 1 < a < candidate - 1.
    pub fn test_once(&self, a: &BigUint) -> Primality {
        debug_assert!(a < &self.candidate, "witness must be < candidate");

        let mut y = a.powm(&self.r, &self.candidate);
        let one = BigUint::one();

        if y == one || y == self.minus_one {
            return Primality::ProbablyPrime;
        }

        // up to s - 1 squarings; hitting candidate - 1 means some later
        // squaring yields 1 with a legitimate square root, hitting 1 any
        // other way exposes a nontrivial square root of unity
        for _ in 1..self.s {
            y = (&y).mulm(&y, &self.candidate);

            if y == one {
                return Primality::Composite;
            } else if y == self.minus_one {
                return Primality::ProbablyPrime;
            }
        }

        Primality::Composite
    }

    /// Draws a uniform witness from [2, candidate - 2], resampling the
    /// occasional value below 2.
    fn draw_witness(&self) -> BigUint {
        let one = BigUint::one();

        loop {
            let a = rng!().gen_biguint_below(&self.minus_one);

            if a > one {
                return a;
            }
        }
    }
}

/// Checks if `n` is likely to be prime, with a false-positive chance of at
/// most (1/4)^iterations.
pub fn is_prime(n: &BigUint, iterations: u64) -> Result<bool, NumTheoryError> {
    RabinMillerTest::new(n.clone()).is_prime(iterations)
}

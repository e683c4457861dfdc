use super::rabin_miller::RabinMillerTest;
use super::NumTheoryError;
use crate::rng::rng;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;

/// By the prime number theorem a uniform draw below 2^bits is prime with
/// probability about 1/(bits * ln 2), so the expected number of candidates
/// is under 0.7 * bits. This budget leaves two orders of magnitude of
/// headroom before the search is declared exhausted.
const MAX_ATTEMPTS_PER_BIT: u64 = 128;

/// Generates a prime in `[0, 2^bits)` certified by `iterations` rounds of
/// the Rabin-Miller test.
///
/// Candidates are drawn uniformly from the shared random stream until one
/// passes; under a fixed seed (see [`crate::rng::reseed`]) the returned
/// prime is reproducible.
pub fn make_prime(bits: u64, iterations: u64) -> Result<BigUint, NumTheoryError> {
    if bits < 2 {
        return Err(NumTheoryError::BitLengthTooSmall { bits });
    }
    if iterations == 0 {
        return Err(NumTheoryError::ZeroIterations);
    }

    let bound = BigUint::one() << bits;
    let attempts = bits.saturating_mul(MAX_ATTEMPTS_PER_BIT);

    for _ in 0..attempts {
        let candidate = rng!().gen_biguint_below(&bound);
        let test = RabinMillerTest::new(candidate);

        if test.is_prime(iterations)? {
            return Ok(test.into_candidate());
        }
    }

    Err(NumTheoryError::PrimeSearchExhausted { bits, attempts })
}

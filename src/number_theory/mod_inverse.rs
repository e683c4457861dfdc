use super::NumTheoryError;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

/// Outcome of a modular inverse computation. The inverse of `a` modulo `n`
/// exists iff `gcd(a, n) = 1`; absence is an expected result, not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inverse {
    Exists(BigUint),
    NoInverse,
}

impl Inverse {
    pub fn exists(&self) -> bool {
        matches!(self, Self::Exists(_))
    }

    pub fn into_option(self) -> Option<BigUint> {
        match self {
            Self::Exists(i) => Some(i),
            Self::NoInverse => None,
        }
    }
}

/// Computes the unique `i` in `[0, n)` with `(a * i) mod n = 1`, via the
/// extended Euclidean algorithm.
///
/// The remainder track `(r, next_r)` starts at `(n, a)` and the Bezout
/// coefficient track `(t, next_t)` at `(0, 1)`; both update in lock-step
/// with the quotient until the remainder reaches zero. The coefficient runs
/// negative on alternating steps, so it is carried as a signed `BigInt` and
/// normalized by adding `n` at the end.
pub fn mod_inverse(a: &BigUint, n: &BigUint) -> Result<Inverse, NumTheoryError> {
    if n.is_zero() {
        return Err(NumTheoryError::ZeroModulus);
    }

    let n = BigInt::from(n.clone());
    let mut r = n.clone();
    let mut next_r = BigInt::from(a.clone());
    let mut t = BigInt::zero();
    let mut next_t = BigInt::one();

    while !next_r.is_zero() {
        let q = &r / &next_r;

        let new_r = &r - &q * &next_r;
        r = std::mem::replace(&mut next_r, new_r);

        let new_t = &t - &q * &next_t;
        t = std::mem::replace(&mut next_t, new_t);
    }

    // the surviving remainder is gcd(a, n)
    if r > BigInt::one() {
        return Ok(Inverse::NoInverse);
    }

    if t.is_negative() {
        t += &n;
    }

    let i = t.to_biguint().expect("coefficient normalized into [0, n)");
    Ok(Inverse::Exists(i))
}

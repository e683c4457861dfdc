use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Modular arithmetic over `BigUint`, with every result reduced into
/// `[0, m)`. All methods assume `m > 0`; the public entry points validate
/// that before calling in here.
pub trait ModularArithmetic {
    type Output;

    fn mulm(self, rhs: Self, m: Self) -> Self::Output;
    fn powm(self, exponent: Self, m: Self) -> Self::Output;
}

impl ModularArithmetic for &BigUint {
    type Output = BigUint;

    fn mulm(self, rhs: Self, m: Self) -> Self::Output {
        (self * rhs) % m
    }

    /// Square-and-multiply: walks the exponent bits from least significant
    /// upward, multiplying the accumulator by the running power wherever a
    /// bit is set. `O(log exponent)` loop iterations.
    fn powm(self, exponent: Self, m: Self) -> Self::Output {
        let mut v = BigUint::one() % m;
        let mut p = self % m;
        let mut e = exponent.clone();

        while !e.is_zero() {
            if e.bit(0) {
                v = (&v).mulm(&p, m);
            }
            p = (&p).mulm(&p, m);
            e >>= 1u32;
        }

        v
    }
}

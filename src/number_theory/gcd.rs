use num_bigint::BigUint;
use num_traits::Zero;

/// Computes the greatest common divisor of `a` and `b` with the Euclidean
/// algorithm. `gcd(a, 0) = a`, so `gcd(0, 0) = 0`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        let temp = b.clone();
        b = &a % &b;
        a = temp;
    }

    a
}

/// Computes the least common multiple of `a` and `b`.
pub fn lcm(a: &BigUint, b: &BigUint) -> BigUint {
    if a.is_zero() && b.is_zero() {
        return BigUint::zero();
    }

    let product = a * b;
    product / gcd(a, b)
}

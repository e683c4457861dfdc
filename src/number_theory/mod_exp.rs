use super::modular_arithmetic::ModularArithmetic;
use super::NumTheoryError;
use num_bigint::BigUint;
use num_traits::Zero;

/// Computes `base^exponent mod modulus`. The result always lies in
/// `[0, modulus)`; `exponent` is iterated on a scratch clone and left
/// untouched.
pub fn mod_exp(
    base: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, NumTheoryError> {
    if modulus.is_zero() {
        return Err(NumTheoryError::ZeroModulus);
    }

    Ok(base.powm(exponent, modulus))
}

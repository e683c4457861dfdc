pub use error::NumTheoryError;
pub use gcd::{gcd, lcm};
pub use mod_exp::mod_exp;
pub use mod_inverse::{mod_inverse, Inverse};
pub use modular_arithmetic::ModularArithmetic;
pub use prime_generation::make_prime;
pub use rabin_miller::{is_prime, Primality, RabinMillerTest};

mod error;
mod gcd;
mod mod_exp;
mod mod_inverse;
mod modular_arithmetic;
mod prime_generation;
mod rabin_miller;

use std::error::Error;
use std::fmt;

/// Invalid configuration or exhausted search, rejected at the public
/// boundary before any computation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumTheoryError {
    /// A modular operation was asked to reduce modulo zero.
    ZeroModulus,
    /// A primality test was requested with zero Miller-Rabin rounds.
    ZeroIterations,
    /// Prime generation needs at least 2 bits for a prime to exist.
    BitLengthTooSmall { bits: u64 },
    /// The bounded retry budget ran out without finding a prime.
    PrimeSearchExhausted { bits: u64, attempts: u64 },
}

impl fmt::Display for NumTheoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroModulus => write!(f, "modulus must be greater than zero"),
            Self::ZeroIterations => {
                write!(f, "iteration count must be at least 1 Miller-Rabin round")
            }
            Self::BitLengthTooSmall { bits } => {
                write!(f, "bit length {bits} is too small, primes need at least 2 bits")
            }
            Self::PrimeSearchExhausted { bits, attempts } => {
                write!(f, "no {bits}-bit prime found after {attempts} candidates")
            }
        }
    }
}

impl Error for NumTheoryError {}

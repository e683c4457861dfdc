use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;

/// The shared random stream feeding witness and candidate draws.
/// The `Mutex` keeps it a single-writer sequential stream; concurrent
/// callers serialize on it.
pub static RNG: Lazy<Mutex<ChaCha8Rng>> = Lazy::new(|| Mutex::new(ChaCha8Rng::from_entropy()));

/// Resets the shared stream to a known seed. Every draw after this call is
/// reproducible bit-for-bit, which makes prime generation deterministic for
/// a fixed seed.
pub fn reseed(seed: u64) {
    *RNG.lock().unwrap() = ChaCha8Rng::seed_from_u64(seed);
}

macro_rules! rng {
    () => {
        *crate::rng::RNG.lock().unwrap()
    };
}

pub(crate) use rng;

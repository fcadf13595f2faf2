//! Random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Seedable**: the same seed produces the identical deal sequence,
//!   which is what the deterministic tests rely on
//! - **Entropy-backed**: production engines seed from OS entropy
//! - **Unit-interval draws**: `next_f64` produces uniform draws in `[0, 1)`
//!   used as sort keys by the random-key shuffle
//!
//! The quality bar is "unpredictable enough for fair dealing", not
//! cryptographic strength. ChaCha8 comfortably clears it while staying fast.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source for shuffling decks.
#[derive(Clone, Debug)]
pub struct DealRng {
    inner: ChaCha8Rng,
}

impl DealRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a uniform draw in `[0, 1)`.
    ///
    /// Uses the top 53 bits of a `u64`, so the draw has full double
    /// precision and never reaches 1.0.
    pub fn next_f64(&mut self) -> f64 {
        let bits: u64 = self.inner.gen();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

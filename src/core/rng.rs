//! Deterministic random number generation.
//!
//! Digit generation is an injected capability: callers own a `GameRng` and
//! lend it to `initialize`. The same seed always produces the same digits,
//! which is what makes games reproducible from a printed seed.
//!
//! ```
//! use digit_pairs::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_digit(), b.gen_digit());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::state::{MAX_DIGIT, MIN_DIGIT};

/// Seedable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    ///
    /// The seed is still recoverable through [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one digit uniformly from `1..=6`.
    pub fn gen_digit(&mut self) -> u8 {
        self.inner.gen_range(MIN_DIGIT..=MAX_DIGIT)
    }

    /// Draw `count` independent digits.
    pub fn gen_digits(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.gen_digit()).collect()
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Explicit seeding**: The engine never reads the clock; hosts pass a
//!   seed, or ask [`GameRng::entropy_seed`] for a fresh one
//!
//! ```
//! use solitaire_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left: Vec<u32> = (0..52).collect();
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used for deck shuffles.
///
/// Uses ChaCha8, so a seed reproduces the same deal on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A fresh seed from the operating system's entropy source.
    ///
    /// For hosts that want an unrepeatable deal; pass the result to
    /// `new_game` (and keep it if the deal should be replayable).
    #[must_use]
    pub fn entropy_seed() -> u64 {
        rand::thread_rng().gen()
    }

    /// Permute `slice` in place with a Fisher–Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

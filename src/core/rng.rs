//! Deterministic random number generation for puzzle solutions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical target orders
//! - **Injectable**: Puzzles take a `PuzzleRng`, so tests can pin a seed
//!
//! ```
//! use puzzle_core::core::PuzzleRng;
//!
//! let mut rng = PuzzleRng::new(42);
//! let order = rng.permutation(4);
//!
//! let mut sorted = order.clone();
//! sorted.sort();
//! assert_eq!(sorted, vec![0, 1, 2, 3]);
//!
//! // Same seed, same order
//! assert_eq!(PuzzleRng::new(42).permutation(4), order);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to shuffle puzzle solutions.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Create an RNG from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Uniformly random permutation of `0..n`.
    #[must_use]
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        self.shuffle(&mut order);
        order
    }
}

//! Deterministic random sequence generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed and same call order produce an identical sequence
//! - **Counted**: Every draw advances a call counter, useful when comparing instances
//! - **Serializable**: O(1) state capture and restore
//!
//! The authoritative instance and every predictive instance construct their
//! generator from the same session seed. As long as the engine issues draws
//! in the same order on both sides, both see the same values.
//!
//! ```
//! use ccg_solver::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! for _ in 0..10 {
//!     assert_eq!(a.next(6), b.next(6));
//! }
//! assert_eq!(a.calls(), 10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded, stateful random sequence generator.
///
/// Uses ChaCha8: a pure function of (seed, position in stream), independent
/// of platform, time and thread.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    calls: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            calls: 0,
        }
    }

    /// Next integer in `[0, max)`.
    ///
    /// An empty range (`max <= 0`) yields 0 without advancing the stream.
    pub fn next(&mut self, max: i64) -> i64 {
        self.next_range(0, max)
    }

    /// Next integer in `[min, max)`.
    ///
    /// An empty range (`max <= min`) yields `min` without advancing the stream.
    pub fn next_range(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.calls += 1;
        self.inner.gen_range(min..max)
    }

    /// Pick an index into a collection of `len` elements.
    ///
    /// Returns `None` for an empty collection (no draw is consumed).
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next(len as i64) as usize)
    }

    /// The session seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            calls: self.calls,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            calls: state.calls,
        }
    }
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Session seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Number of draws taken
    pub calls: u64,
}

//! Injectable randomness for deck building.
//!
//! The deck builder never touches a global RNG. Everything random (pool
//! permutation, decoy draws, the final shuffle) goes through the
//! [`RandomSource`] trait so callers can pick the source:
//!
//! - [`GameRng`]: seeded ChaCha8, the default for real play and replays
//! - [`ScriptedRng`]: replays a fixed list of indices, for tests that assert
//!   exact output sequences
//!
//! ```
//! use keepsake_match::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(rng1.next_below(100), rng2.next_below(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A source of uniform random indices.
pub trait RandomSource {
    /// Return a uniformly distributed index in `0..bound`.
    ///
    /// `bound` is always at least 1.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

/// Deterministic RNG backed by ChaCha8.
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

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is kept so the attempt can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen::<u64>();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
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
        }
    }
}

impl RandomSource for GameRng {
    fn next_below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound.max(1))
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how
/// many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed script of indices.
///
/// Each call returns the next script value reduced modulo `bound`; the
/// script wraps around when exhausted. An empty script always yields 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source.
    #[must_use]
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// A source that always returns 0.
    ///
    /// Under Fisher-Yates this rotates rather than preserves order, which
    /// is still fully predictable.
    #[must_use]
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_below(&mut self, bound: usize) -> usize {
        let bound = bound.max(1);
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value % bound
    }
}

//! Random selection for phrase resolution.
//!
//! Every random choice made while bursting a phrase (which effect, which
//! variant of each modifier kind, which target mode) goes through the
//! [`RandomSource`] trait, so hosts and tests can substitute their own
//! source.
//!
//! ## Provided Sources
//!
//! - [`SpellRng::new`]: ChaCha8 seeded from a `u64`; same seed, same casts
//! - [`SpellRng::from_entropy`]: freshly seeded from the OS
//!
//! ```
//! use arcane_spells::core::{RandomSource, SpellRng};
//!
//! let mut rng1 = SpellRng::new(42);
//! let mut rng2 = SpellRng::new(42);
//!
//! let options = ["fire", "frost", "storm"];
//! assert_eq!(rng1.choose(&options), rng2.choose(&options));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform random indices.
pub trait RandomSource {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Choose a random element from a slice, or `None` if it is empty.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        choose_from(self, slice)
    }
}

/// Choose a random element through a (possibly unsized) random source.
pub fn choose_from<'a, T, R>(rng: &mut R, slice: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    if slice.is_empty() {
        return None;
    }
    // Guard against sources that ignore the contract.
    let index = rng.pick_index(slice.len()) % slice.len();
    slice.get(index)
}

/// Choose a random element, falling back to `default` when there are none.
pub fn choose_or<T, R>(rng: &mut R, slice: &[T], default: T) -> T
where
    T: Copy,
    R: RandomSource + ?Sized,
{
    choose_from(rng, slice).copied().unwrap_or(default)
}

/// ChaCha8-backed random source.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct SpellRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SpellRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> SpellRngState {
        SpellRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &SpellRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for SpellRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position so capture and restore are O(1)
/// regardless of how many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

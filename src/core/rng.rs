//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes
//!
//! The draft engine draws from two streams derived from one seed, one for
//! dealing the deck and one for automated decisions, so changing how the
//! automated seat plays never changes which cards were dealt.
//!
//! ```
//! use winston_draft::core::DraftRng;
//!
//! let root = DraftRng::new(42);
//! let mut shuffle = root.for_context("shuffle");
//! let mut again = DraftRng::new(42).for_context("shuffle");
//!
//! assert_eq!(shuffle.gen_range_usize(0..100), again.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic RNG for dealing and automated play.
///
/// Uses ChaCha8 for speed. Context streams are derived with a fixed
/// FNV-1a mix, so a logged seed replays the same draft on any platform
/// and toolchain.
#[derive(Clone, Debug)]
pub struct DraftRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DraftRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from operating-system entropy.
    ///
    /// The chosen seed is available via [`DraftRng::seed`] so the run can be
    /// replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

/// FNV-1a over the seed's little-endian bytes followed by the context.
fn context_seed(seed: u64, context: &str) -> u64 {
    seed.to_le_bytes()
        .iter()
        .chain(context.as_bytes())
        .fold(FNV_OFFSET, |hash, &byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME))
}

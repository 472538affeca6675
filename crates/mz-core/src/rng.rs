//! Deterministic RNG for mock decision policies.
//!
//! The reference program's offline mode picks a uniformly random action.
//! Seeding it through `PolicyRng` makes such sessions reproducible: the same
//! seed always yields the same action sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by a single policy.
pub struct PolicyRng(SmallRng);

impl PolicyRng {
    pub fn new(seed: u64) -> Self {
        PolicyRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

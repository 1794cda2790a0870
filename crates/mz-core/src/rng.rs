//! Random number generation for map generation
//!
//! Every stage draws from a [`RandomSource`] passed in by the caller, so a
//! fixed seed reproduces the same map. [`MapRng`] is the seeded default.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Uniform random draws used by the generator
pub trait RandomSource {
    /// Returns a uniform integer in `0..n`
    ///
    /// Returns 0 if n is 0.
    fn rn2(&mut self, n: usize) -> usize;

    /// Returns a uniform float in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Choose a random element from a slice
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len())])
        }
    }

    /// Shuffle a slice in place (Fisher-Yates)
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.rn2(i + 1);
            items.swap(i, j);
        }
    }
}

/// Map random number generator
///
/// Wraps ChaCha8Rng for reproducible generation.
/// Only the seed is serialized; a restored generator starts over from it.
#[derive(Debug, Clone)]
pub struct MapRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for MapRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MapRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(MapRng::new(seed))
    }
}

impl MapRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for MapRng {
    fn rn2(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    fn unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

impl Default for MapRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

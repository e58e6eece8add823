use rand::{Rng, random};

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// A source of random numbers for the random bot.
pub trait RandomGenerator: Default {
    fn next(&mut self) -> i32;

    /// Returns a number in `from..to`. The range must not be empty.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks one element of `items`, or `None` if it is empty.
    fn pick<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }
}

/// Draws from the thread-local generator of `rand`.
#[derive(Debug, Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// A seeded linear congruential generator, for games that must replay identically.
#[derive(Debug)]
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Folds an arbitrary `u64` seed into the generator's range.
    pub fn from_seed(seed: u64) -> Self {
        Self::new((seed % i32::MAX as u64) as i64)
    }
}

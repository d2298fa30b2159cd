use rand::Rng;

const MULTIPLIER_A: u64 = 1103515245;
const INCREMENT_C: u64 = 12345;
const MODULUS: u64 = i32::MAX as u64;
const DEFAULT_SEED: u64 = 3819201;

/// Source of randomness for the presentation side of the game.
///
/// The search never consults one of these; they only drive the thinking highlights and
/// random opponents.
pub trait RandomGenerator: Default {
    /// Returns a value in `0..bound`. `bound` must not be zero.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Picks one element of `items`, or `None` if it is empty.
    fn pick<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_below(items.len()))
    }
}

/// Thread-local `rand` generator.
#[derive(Debug, Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_below(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

/// Linear congruential generator with a fixed seed, for reproducible runs.
#[derive(Debug)]
pub struct CustomNumberGenerator {
    seed: u64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: u64) -> Self {
        Self {
            seed: seed % MODULUS,
        }
    }

    fn next(&mut self) -> u64 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % MODULUS;
        self.seed
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next_below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }
}

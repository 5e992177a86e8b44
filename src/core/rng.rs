//! Deterministic random number generation.
//!
//! Every source of randomness in the engine (tile deck shuffle, tile
//! rotations, objective deal, the bot's fallback moves) draws from a
//! `GameRng` passed in explicitly. There is no ambient global RNG, so a game
//! is fully reproducible from its seed.
//!
//! ```
//! use shifting_maze::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Each new game gets its own branch of the stream
//! let mut deal = rng.fork();
//!
//! // The bot draws from an independent, named stream
//! let mut bot = rng.for_context("bot");
//!
//! assert!(deal.gen_range_usize(0..4) < 4);
//! assert!(bot.gen_range_usize(0..12) < 12);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seeded ChaCha8 stream that can branch into independent child streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next child stream. The n-th fork of a seed is always the same stream,
    /// and no two forks of one parent coincide.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Named child stream, independent of how often this one was forked.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// Uniform draw from `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// `None` only for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng) -> Vec<usize> {
        (0..16).map(|_| rng.gen_range_usize(0..49)).collect()
    }

    #[test]
    fn test_same_seed_same_stream() {
        assert_eq!(draws(&mut GameRng::new(42)), draws(&mut GameRng::new(42)));
        assert_ne!(draws(&mut GameRng::new(1)), draws(&mut GameRng::new(2)));
    }

    #[test]
    fn test_forks() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        let first = a.fork();
        assert_eq!(first.seed(), b.fork().seed());
        assert_ne!(first.seed(), a.fork().seed());
    }

    #[test]
    fn test_context_ignores_forks() {
        let mut root = GameRng::new(42);
        let before = root.for_context("bot");
        let _ = root.fork();

        assert_eq!(before.seed(), root.for_context("bot").seed());
        assert_ne!(before.seed(), root.for_context("deal").seed());
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = GameRng::new(7);
        let mut cards: Vec<usize> = (0..24).collect();

        rng.shuffle(&mut cards);

        assert_ne!(cards, (0..24).collect::<Vec<_>>());
        cards.sort_unstable();
        assert_eq!(cards, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(7);
        let lines = [1, 3, 5];

        assert!(rng.choose(&lines).is_some_and(|l| lines.contains(l)));
        let none: [usize; 0] = [];
        assert!(rng.choose(&none).is_none());
    }
}

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::range::GuessRange;

/// Picks the secret number for a new game.
pub trait TargetSource {
    fn pick(&mut self, range: &GuessRange) -> i64;
}

/// Uniform draw over the whole range from any `rand` generator.
pub struct RandomTarget<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomTarget<R> {
    pub fn new(rng: R) -> Self {
        RandomTarget { rng }
    }
}

impl RandomTarget<ThreadRng> {
    pub fn from_thread_rng() -> Self {
        RandomTarget::new(rand::rng())
    }
}

impl RandomTarget<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RandomTarget::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TargetSource for RandomTarget<R> {
    fn pick(&mut self, range: &GuessRange) -> i64 {
        self.rng.random_range(range.as_inclusive())
    }
}

/// Always yields the same number, clamped into the range.
#[derive(Debug, Clone, Copy)]
pub struct FixedTarget(pub i64);

impl TargetSource for FixedTarget {
    fn pick(&mut self, range: &GuessRange) -> i64 {
        self.0.clamp(range.min(), range.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_target_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let a: i64 = rng.random_range(-50..=50);
            let b: i64 = rng.random_range(-50..=50);
            let range = GuessRange::new(a.min(b), a.max(b)).unwrap();
            let mut source = RandomTarget::seeded(rng.random());
            for _ in 0..20 {
                let target = source.pick(&range);
                assert!(range.contains(target), "{} not in {}", target, range);
            }
        }
    }

    #[test]
    fn random_target_covers_small_range() {
        let range = GuessRange::new(1, 3).unwrap();
        let mut source = RandomTarget::seeded(7);
        let mut seen = [false; 3];
        for _ in 0..300 {
            seen[(source.pick(&range) - 1) as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn same_seed_same_target() {
        let range = GuessRange::default();
        let first: Vec<i64> = {
            let mut source = RandomTarget::seeded(1234);
            (0..10).map(|_| source.pick(&range)).collect()
        };
        let mut source = RandomTarget::seeded(1234);
        let second: Vec<i64> = (0..10).map(|_| source.pick(&range)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn degenerate_range_always_hits_bound() {
        let range = GuessRange::new(5, 5).unwrap();
        let mut source = RandomTarget::from_thread_rng();
        for _ in 0..50 {
            assert_eq!(source.pick(&range), 5);
        }
    }

    #[test]
    fn fixed_target_is_clamped() {
        let range = GuessRange::new(1, 10).unwrap();
        assert_eq!(FixedTarget(7).pick(&range), 7);
        assert_eq!(FixedTarget(-3).pick(&range), 1);
        assert_eq!(FixedTarget(99).pick(&range), 10);
    }
}

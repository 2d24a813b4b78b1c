use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random source handed to the bot. The same seed replays the same
/// sequence of decisions.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Returns `true` with the given probability, clamped to `0.0..=1.0`.
    pub fn random_chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let seq_a: Vec<usize> = (0..16).map(|_| a.random_range(0..9)).collect();
        let seq_b: Vec<usize> = (0..16).map(|_| b.random_range(0..9)).collect();
        assert_eq!(seq_a, seq_b);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_random_chance_extremes() {
        let mut rng = SessionRng::new(1);
        for _ in 0..100 {
            assert!(rng.random_chance(1.0));
            assert!(!rng.random_chance(0.0));
        }
    }
}

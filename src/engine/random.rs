use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of randomness for the simulated scanner, injectable for tests.
pub trait RandomSource: Send {
    /// Uniform integer in `min..=max`. Callers guarantee `min <= max`.
    fn pick_count(&mut self, min: usize, max: usize) -> usize;

    /// Shuffle `items` in place.
    fn shuffle(&mut self, items: &mut [String]);
}

pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, otherwise from OS entropy.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for StdRandom {
    fn pick_count(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }

    fn shuffle(&mut self, items: &mut [String]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdRandom::seeded(42);
        let mut b = StdRandom::seeded(42);
        let mut xs: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let mut ys = xs.clone();
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);
        assert_eq!(xs, ys);
        assert_eq!(a.pick_count(3, 6), b.pick_count(3, 6));
    }

    #[test]
    fn pick_count_stays_in_range() {
        let mut r = StdRandom::seeded(7);
        for _ in 0..500 {
            let n = r.pick_count(3, 6);
            assert!((3..=6).contains(&n));
        }
    }
}

use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

/// Criterion timing budget, scaled to the input size of a benchmark.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimeProfile {
    Small,
    Medium,
    Large,
}

impl RuntimeProfile {
    pub fn for_size(size: usize) -> Self {
        if size <= 4_096 {
            Self::Small
        } else if size <= 16_384 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    fn sample_size(self) -> usize {
        match self {
            Self::Small | Self::Medium => 15,
            Self::Large => 10,
        }
    }

    fn warm_up_ms(self) -> u64 {
        match self {
            Self::Small => 100,
            Self::Medium => 500,
            Self::Large => 800,
        }
    }

    fn measure_ms(self) -> u64 {
        match self {
            Self::Small => 200,
            Self::Medium => 1000,
            Self::Large => 1500,
        }
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size());
        group.warm_up_time(Duration::from_millis(self.warm_up_ms()));
        group.measurement_time(Duration::from_millis(self.measure_ms()));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `len` values drawn uniformly from `0..distinct`, so roughly
/// `min(len, distinct)` of them are different.
pub fn random_values<R: Rng + ?Sized>(rng: &mut R, len: usize, distinct: u64) -> Vec<u64> {
    debug_assert!(distinct > 0);
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(rng.random_range(0..distinct));
    }
    values
}

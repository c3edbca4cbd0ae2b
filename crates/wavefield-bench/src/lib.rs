//! Benchmark profiles for the Wavefield simulation engine.
//!
//! - [`reference_profile`]: 100K points, 100 steps
//! - [`small_profile`]: 1K points, 1000 steps, where per-step overhead dominates
//! - [`worker_counts`]: the thread counts strategies are compared at

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wavefield_arena::GenerationArena;
use wavefield_core::{RunConfig, Strategy};
use wavefield_test_utils::sine_pair;

/// One benchmark case: a config and the field it starts from.
#[derive(Clone, Debug)]
pub struct Profile {
    /// Label used in benchmark ids.
    pub name: &'static str,
    /// Run parameters. The strategy is overridden per benchmark.
    pub config: RunConfig,
}

impl Profile {
    /// Fresh arena for one iteration, seeded with a whole-field sine.
    pub fn arena(&self) -> GenerationArena {
        sine_pair(self.config.i_max, 5.0, 0.01).into_arena()
    }

    /// This profile's config with `strategy` and `num_workers` applied.
    pub fn with(&self, strategy: Strategy, num_workers: usize) -> RunConfig {
        let mut config = self.config.clone().with_strategy(strategy);
        config.num_workers = num_workers;
        config
    }
}

/// Large grid where the stencil dominates.
pub fn reference_profile() -> Profile {
    Profile {
        name: "reference_100k",
        config: RunConfig::new(100_000, 100, 1),
    }
}

/// Small grid where synchronisation cost dominates.
pub fn small_profile() -> Profile {
    Profile {
        name: "small_1k",
        config: RunConfig::new(1_000, 1_000, 1),
    }
}

/// Worker counts to sweep, capped at the machine's parallelism.
pub fn worker_counts() -> Vec<usize> {
    let max = std::thread::available_parallelism().map_or(1, |n| n.get());
    [1, 2, 4, 8].into_iter().filter(|&n| n <= max.max(2)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        for profile in [reference_profile(), small_profile()] {
            profile.config.validate().unwrap();
            assert_eq!(profile.arena().len(), profile.config.i_max);
        }
    }

    #[test]
    fn with_overrides_strategy_and_workers() {
        let config = small_profile().with(Strategy::Rayon, 4);
        assert_eq!(config.strategy, Strategy::Rayon);
        assert_eq!(config.num_workers, 4);
        assert_eq!(config.i_max, 1_000);
    }

    #[test]
    fn worker_counts_start_at_one() {
        let counts = worker_counts();
        assert_eq!(counts[0], 1);
        assert!(counts.contains(&2));
    }
}

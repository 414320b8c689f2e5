//! Benchmark profiles and utilities for the Outbreak simulation.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: the default 170-entity world
//! - [`crowd_profile`]: ten times the reference population
//! - [`scattered_goals`]: deterministic goal sets for strategy benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use outbreak_core::geometry::{max_x, max_y};
use outbreak_core::{Position, SMALL_FOOTPRINT};
use outbreak_engine::{Population, SimulationConfig};
use outbreak_targeting::StrategyKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The default world: 100 humans, 50 zombies, 5 shelters, 5 food, 10 axes.
pub fn reference_profile(seed: u64, strategy: StrategyKind) -> SimulationConfig {
    SimulationConfig {
        strategy,
        seed,
        ..SimulationConfig::default()
    }
}

/// Ten times the reference population in the same world.
///
/// Collision detection is quadratic in the live count, so this is the
/// profile that shows it.
pub fn crowd_profile(seed: u64, strategy: StrategyKind) -> SimulationConfig {
    let base = Population::default();
    SimulationConfig {
        population: Population {
            humans: base.humans * 10,
            zombies: base.zombies * 10,
            shelters: base.shelters * 10,
            food: base.food * 10,
            axes: base.axes * 10,
        },
        strategy,
        seed,
        ..SimulationConfig::default()
    }
}

/// `count` goal positions spread uniformly over the world.
pub fn scattered_goals(count: usize, seed: u64) -> Vec<Position> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Position::new(
                rng.random_range(0..max_x(SMALL_FOOTPRINT)),
                rng.random_range(0..max_y(SMALL_FOOTPRINT)),
            )
        })
        .collect()
}

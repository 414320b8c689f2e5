//! Outbreak: a tick-driven human/zombie ecosystem simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Outbreak sub-crates. Adding `outbreak` as a single dependency is
//! enough for most users.
//!
//! # Quick start
//!
//! ```rust
//! use outbreak::prelude::*;
//!
//! let config = SimulationConfig {
//!     population: Population { humans: 10, zombies: 5, ..Population::default() },
//!     strategy: StrategyKind::NearestGoal,
//!     seed: 42,
//!     ..SimulationConfig::default()
//! };
//! let mut engine = SimulationEngine::new(config).unwrap();
//! assert_eq!(engine.count_of(EntityKind::Human), 10);
//!
//! let (observer, ticks) = ChannelObserver::channel();
//! engine.add_observer(Box::new(observer));
//!
//! let result = engine.execute_tick();
//! assert_eq!(result.tick, TickId(1));
//! assert_eq!(ticks.try_iter().count(), 1);
//!
//! let snapshot = engine.entities();
//! assert_eq!(snapshot.tick, TickId(1));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `outbreak-core` | IDs, geometry, entities, commands, the strategy trait |
//! | [`targeting`] | `outbreak-targeting` | Built-in strategies and [`targeting::StrategyKind`] |
//! | [`engine`] | `outbreak-engine` | Tick engine, realtime runner, config, observers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`outbreak-core`).
///
/// Identifiers, world geometry and constants, the [`types::Entity`] model
/// with its state machines, commands, and the
/// [`types::TargetingStrategy`] trait.
pub use outbreak_core as types;

/// Targeting strategies (`outbreak-targeting`).
///
/// [`targeting::NearestGoal`] chases the closest goal,
/// [`targeting::RandomStep`] drifts at random.
pub use outbreak_targeting as targeting;

/// Simulation engines (`outbreak-engine`).
///
/// [`engine::SimulationEngine`] for stepping on the caller's thread,
/// [`engine::RealtimeSimulation`] for paced background ticking.
pub use outbreak_engine as engine;

/// Common imports for typical Outbreak usage.
///
/// ```rust
/// use outbreak::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use outbreak_core::{
        Command, Entity, EntityId, EntityKind, Mover, Outcome, Position, Receipt,
        TargetingStrategy, TickId,
    };

    // Strategies
    pub use outbreak_targeting::{NearestGoal, RandomStep, StrategyKind};

    // Engine
    pub use outbreak_engine::{
        ChannelObserver, ConfigError, Population, RealtimeSimulation, RunError,
        SimulationConfig, SimulationEngine, Speeds, StepMetrics, SubmitError, TickObserver,
        WorldSnapshot,
    };
}

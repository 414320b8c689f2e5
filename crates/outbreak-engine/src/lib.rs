//! Simulation engine for the Outbreak ecosystem.
//!
//! [`SimulationEngine`] is a callable struct that advances the world one
//! tick at a time on the caller's thread. [`RealtimeSimulation`] wraps it
//! in a background thread that ticks at a fixed interval and accepts
//! commands over a channel.
//!
//! Both publish a [`WorldSnapshot`] to a shared [`SnapshotCell`] after
//! every tick and then notify each registered [`TickObserver`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod factory;
pub mod metrics;
pub mod observer;
pub mod realtime;
pub mod snapshot;
pub mod tick;
pub(crate) mod tick_thread;

pub use config::{ConfigError, Population, SimulationConfig, Speeds};
pub use factory::{
    factories_for, AxeFactory, EntityFactory, FoodFactory, HumanFactory, ShelterFactory,
    ZombieFactory,
};
pub use metrics::StepMetrics;
pub use observer::{ChannelObserver, TickObserver};
pub use realtime::{RealtimeSimulation, RunError, StopReport, SubmitError};
pub use snapshot::{SnapshotCell, WorldSnapshot};
pub use tick::{in_contact, SimulationEngine, TickResult};

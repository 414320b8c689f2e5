//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the input for constructing a
//! [`SimulationEngine`](crate::SimulationEngine). [`validate()`](SimulationConfig::validate)
//! checks the few invariants the engine relies on before any entity is
//! created.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use outbreak_core::EntityKind;
use outbreak_targeting::StrategyKind;

// ── Population ─────────────────────────────────────────────────────

/// How many entities of each kind to create on (re)initialisation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Population {
    /// Number of humans. Default: 100.
    pub humans: usize,
    /// Number of zombies. Default: 50.
    pub zombies: usize,
    /// Number of shelters. Default: 5.
    pub shelters: usize,
    /// Number of food items. Default: 5.
    pub food: usize,
    /// Number of axes. Default: 10.
    pub axes: usize,
}

impl Population {
    /// A population with no entities at all.
    pub const fn empty() -> Self {
        Self {
            humans: 0,
            zombies: 0,
            shelters: 0,
            food: 0,
            axes: 0,
        }
    }

    /// Configured count for `kind`.
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Human => self.humans,
            EntityKind::Zombie => self.zombies,
            EntityKind::Shelter => self.shelters,
            EntityKind::Food => self.food,
            EntityKind::Axe => self.axes,
        }
    }

    /// Total number of entities across all kinds.
    pub fn total(&self) -> usize {
        EntityKind::ALL.iter().map(|&k| self.count(k)).sum()
    }
}

impl Default for Population {
    fn default() -> Self {
        Self {
            humans: 100,
            zombies: 50,
            shelters: 5,
            food: 5,
            axes: 10,
        }
    }
}

// ── Speeds ─────────────────────────────────────────────────────────

/// Creation-time speeds for the mobile kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Speeds {
    /// Human speed. Default: 5.
    pub human: u32,
    /// Zombie speed, also given to zombies created by infection. Default: 3.
    pub zombie: u32,
}

impl Speeds {
    /// Both speeds must be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.human == 0 {
            return Err(ConfigError::NonPositiveSpeed {
                kind: EntityKind::Human,
                value: self.human,
            });
        }
        if self.zombie == 0 {
            return Err(ConfigError::NonPositiveSpeed {
                kind: EntityKind::Zombie,
                value: self.zombie,
            });
        }
        Ok(())
    }
}

impl Default for Speeds {
    fn default() -> Self {
        Self { human: 5, zombie: 3 }
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Initial entity counts.
    pub population: Population,
    /// Mobile entity speeds.
    pub speeds: Speeds,
    /// Engine-wide targeting strategy. Default: [`StrategyKind::RandomStep`].
    pub strategy: StrategyKind,
    /// Seed for the engine's RNG. Default: 0.
    pub seed: u64,
    /// Pacing of the realtime tick loop. Default: 100 ms. Must be non-zero.
    pub tick_interval: Duration,
}

impl SimulationConfig {
    /// Check speeds and tick interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.speeds.validate()?;
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population: Population::default(),
            speeds: Speeds::default(),
            strategy: StrategyKind::default(),
            seed: 0,
            tick_interval: Duration::from_millis(100),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`SimulationConfig::validate()`] or while moving the
/// engine in and out of its tick thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A mobile kind was configured with speed zero.
    NonPositiveSpeed {
        /// The kind whose speed was rejected.
        kind: EntityKind,
        /// The rejected value.
        value: u32,
    },
    /// The realtime tick interval is zero.
    ZeroTickInterval,
    /// The tick thread panicked and the engine could not be recovered.
    EngineRecoveryFailed,
    /// The OS refused to spawn the tick thread.
    ThreadSpawnFailed {
        /// Error reported by the OS.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSpeed { kind, value } => {
                write!(f, "{kind} speed must be positive, got {value}")
            }
            Self::ZeroTickInterval => write!(f, "tick interval must be non-zero"),
            Self::EngineRecoveryFailed => {
                write!(f, "engine could not be recovered from the tick thread")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "failed to spawn tick thread: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

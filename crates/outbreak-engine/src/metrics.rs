//! Per-tick metrics for the simulation engine.
//!
//! [`StepMetrics`] captures phase timings and population changes for a
//! single tick. The engine keeps the most recent one around for the tick
//! thread's debug log and for callers polling between ticks.

/// Timing and population data collected during a single tick.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Time spent in the update phase.
    pub update_us: u64,
    /// Time spent detecting and resolving collisions.
    pub collision_us: u64,
    /// Time spent in the lifespan sweep.
    pub sweep_us: u64,
    /// Time spent publishing the snapshot.
    pub snapshot_publish_us: u64,
    /// Pairs that touched and had their reactions run.
    pub collisions: u32,
    /// Entities created by collision reactions.
    pub spawned: u32,
    /// Entities removed by collision reactions.
    pub collision_removals: u32,
    /// Entities removed by the lifespan sweep.
    pub expired: u32,
    /// Live entities after the tick.
    pub live: usize,
}

impl StepMetrics {
    /// Net change in population caused by this tick's collisions and sweep.
    pub fn net_change(&self) -> i64 {
        i64::from(self.spawned) - i64::from(self.collision_removals) - i64::from(self.expired)
    }
}

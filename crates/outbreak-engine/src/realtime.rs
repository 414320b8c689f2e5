//! Paced background execution of a [`SimulationEngine`].
//!
//! [`RealtimeSimulation`] starts out stopped, holding the engine directly.
//! [`start()`](RealtimeSimulation::start) moves the engine onto a named tick
//! thread; [`stop()`](RealtimeSimulation::stop) raises the shutdown flag,
//! wakes the thread, and recovers the engine from its `JoinHandle`.
//!
//! While running, mutations travel to the tick thread over a bounded
//! channel and take effect at the start of the next tick. Reads go through
//! the shared [`SnapshotCell`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Sender, TrySendError};
use tracing::{info, warn};

use outbreak_core::{Command, Entity, EntityId, Outcome, Receipt, TickId};

use crate::config::{ConfigError, Population, SimulationConfig, Speeds};
use crate::observer::TickObserver;
use crate::snapshot::{SnapshotCell, WorldSnapshot};
use crate::tick::SimulationEngine;
use crate::tick_thread::{Control, TickThreadState};

/// Capacity of the control channel to the tick thread.
const CONTROL_QUEUE: usize = 64;

// ── Error types ──────────────────────────────────────────────────

/// Error sending a request to the tick thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The tick thread has shut down, or the engine was lost.
    Shutdown,
    /// The control channel is full (back-pressure).
    ChannelFull,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tick thread has shut down"),
            Self::ChannelFull => write!(f, "control channel full"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Error changing the run state or configuration of a [`RealtimeSimulation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// `start()` was called while the tick thread is running.
    AlreadyRunning,
    /// The operation is only allowed while stopped.
    Running,
    /// Configuration was rejected, or the tick thread could not be managed.
    Config(ConfigError),
    /// The request could not be delivered to the tick thread.
    Submit(SubmitError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "simulation is already running"),
            Self::Running => write!(f, "operation requires a stopped simulation"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Submit(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Submit(e) => Some(e),
            Self::AlreadyRunning | Self::Running => None,
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SubmitError> for RunError {
    fn from(e: SubmitError) -> Self {
        Self::Submit(e)
    }
}

// ── StopReport ───────────────────────────────────────────────────

/// Report from [`RealtimeSimulation::stop()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopReport {
    /// Time from raising the flag to having the engine back.
    pub total_ms: u64,
    /// Ticks completed when the thread exited.
    pub final_tick: TickId,
    /// Whether the tick thread was joined and the engine recovered.
    pub tick_joined: bool,
    /// Whether a thread was running at all.
    pub was_running: bool,
}

// ── RealtimeSimulation ───────────────────────────────────────────

/// A simulation ticking at a fixed interval on a background thread.
pub struct RealtimeSimulation {
    /// `Some` while stopped; moved into the tick thread while running.
    engine: Option<SimulationEngine>,
    control_tx: Option<Sender<Control>>,
    shutdown_flag: Arc<AtomicBool>,
    tick_stopped: Arc<AtomicBool>,
    tick_thread: Option<JoinHandle<SimulationEngine>>,
    snapshot: Arc<SnapshotCell>,
    tick_interval: Duration,
}

impl RealtimeSimulation {
    /// Build the engine from `config`. The simulation starts stopped.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(SimulationEngine::new(config)?))
    }

    /// Wrap an existing engine, paced at its configured tick interval.
    pub fn from_engine(engine: SimulationEngine) -> Self {
        Self {
            snapshot: engine.snapshot_cell(),
            tick_interval: engine.config().tick_interval,
            engine: Some(engine),
            control_tx: None,
            shutdown_flag: Arc::new(AtomicBool::new(false)),
            tick_stopped: Arc::new(AtomicBool::new(true)),
            tick_thread: None,
        }
    }

    /// Move the engine onto a fresh tick thread.
    pub fn start(&mut self) -> Result<(), RunError> {
        if self.tick_thread.is_some() {
            return Err(RunError::AlreadyRunning);
        }
        let engine = self
            .engine
            .take()
            .ok_or(RunError::Config(ConfigError::EngineRecoveryFailed))?;

        self.shutdown_flag = Arc::new(AtomicBool::new(false));
        self.tick_stopped = Arc::new(AtomicBool::new(false));
        let (control_tx, control_rx) = crossbeam_channel::bounded(CONTROL_QUEUE);

        let state = TickThreadState::new(
            engine,
            control_rx,
            Arc::clone(&self.shutdown_flag),
            Arc::clone(&self.tick_stopped),
            self.tick_interval,
        );
        let handle = thread::Builder::new()
            .name("outbreak-tick".into())
            .spawn(move || state.run())
            // On failure the engine is dropped with the closure.
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        self.control_tx = Some(control_tx);
        self.tick_thread = Some(handle);
        info!(interval_ms = self.tick_interval.as_millis() as u64, "simulation started");
        Ok(())
    }

    /// Stop the tick thread and take the engine back.
    ///
    /// The tick in flight, if any, runs to completion. Calling this while
    /// stopped is a no-op.
    pub fn stop(&mut self) -> StopReport {
        let Some(handle) = self.tick_thread.take() else {
            return StopReport {
                total_ms: 0,
                final_tick: self.current_tick(),
                tick_joined: self.engine.is_some(),
                was_running: false,
            };
        };

        let start = Instant::now();
        self.shutdown_flag.store(true, Ordering::Release);
        // Wake the thread if it is parked between ticks.
        handle.thread().unpark();
        self.control_tx.take();

        let tick_joined = match handle.join() {
            Ok(engine) => {
                self.engine = Some(engine);
                true
            }
            Err(_) => {
                warn!("tick thread panicked; engine lost");
                false
            }
        };

        let report = StopReport {
            total_ms: start.elapsed().as_millis() as u64,
            final_tick: self.current_tick(),
            tick_joined,
            was_running: true,
        };
        info!(
            final_tick = %report.final_tick,
            total_ms = report.total_ms,
            "simulation stopped"
        );
        report
    }

    /// Whether the tick thread is running.
    ///
    /// A thread that exited by panicking never sets `tick_stopped`, so the
    /// handle is checked too.
    pub fn is_running(&self) -> bool {
        self.tick_thread
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
            && !self.tick_stopped.load(Ordering::Acquire)
    }

    // ── Mutation ─────────────────────────────────────────────────

    /// Apply commands, directly when stopped or at the next tick when
    /// running.
    pub fn submit(&mut self, commands: Vec<Command>) -> Result<Vec<Receipt>, SubmitError> {
        if let Some(engine) = self.engine.as_mut() {
            return Ok(engine.submit(commands));
        }
        let control_tx = self.control_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        send(
            control_tx,
            Control::Submit {
                commands,
                reply: reply_tx,
            },
        )?;
        reply_rx.recv().map_err(|_| SubmitError::Shutdown)
    }

    /// Add one entity and return its ID.
    pub fn add_entity(&mut self, entity: Entity) -> Result<EntityId, SubmitError> {
        let receipts = self.submit(vec![Command::Spawn(entity)])?;
        match receipts.first().map(|r| r.outcome) {
            Some(Outcome::Spawned(id)) => Ok(id),
            _ => Err(SubmitError::Shutdown),
        }
    }

    /// Remove one entity. `Ok(false)` if it was already gone.
    pub fn remove_entity(&mut self, id: EntityId) -> Result<bool, SubmitError> {
        let receipts = self.submit(vec![Command::Remove { entity_id: id }])?;
        Ok(matches!(
            receipts.first().map(|r| r.outcome),
            Some(Outcome::Removed(_))
        ))
    }

    /// Clear and rebuild the world; see [`SimulationEngine::reconfigure()`].
    pub fn reconfigure(
        &mut self,
        population: Population,
        speeds: Speeds,
        strategy_name: &str,
    ) -> Result<(), RunError> {
        if let Some(engine) = self.engine.as_mut() {
            return Ok(engine.reconfigure(population, speeds, strategy_name)?);
        }
        let control_tx = self.control_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        send(
            control_tx,
            Control::Reconfigure {
                population,
                speeds,
                strategy: strategy_name.to_owned(),
                reply: reply_tx,
            },
        )?;
        let result = reply_rx.recv().map_err(|_| SubmitError::Shutdown)?;
        Ok(result?)
    }

    /// Register an observer. Only allowed while stopped.
    pub fn add_observer(&mut self, observer: Box<dyn TickObserver>) -> Result<(), RunError> {
        if self.tick_thread.is_some() {
            return Err(RunError::Running);
        }
        let engine = self
            .engine
            .as_mut()
            .ok_or(RunError::Config(ConfigError::EngineRecoveryFailed))?;
        engine.add_observer(observer);
        Ok(())
    }

    // ── Reads ────────────────────────────────────────────────────

    /// Every live entity: read from the engine when stopped, or from the
    /// latest published snapshot when running.
    pub fn entities(&self) -> Arc<WorldSnapshot> {
        match &self.engine {
            Some(engine) => Arc::new(engine.entities()),
            None => self.snapshot.latest(),
        }
    }

    /// Ticks completed so far, as far as this thread can see.
    pub fn current_tick(&self) -> TickId {
        match &self.engine {
            Some(engine) => engine.current_tick(),
            None => self.snapshot.latest().tick,
        }
    }

    /// The engine, when stopped.
    pub fn engine(&self) -> Option<&SimulationEngine> {
        self.engine.as_ref()
    }

    /// The engine, mutably, when stopped.
    pub fn engine_mut(&mut self) -> Option<&mut SimulationEngine> {
        self.engine.as_mut()
    }

    /// The cell every tick is published to, for readers on other threads.
    pub fn snapshot_cell(&self) -> Arc<SnapshotCell> {
        Arc::clone(&self.snapshot)
    }

    /// The pacing interval.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

fn send(tx: &Sender<Control>, control: Control) -> Result<(), SubmitError> {
    tx.try_send(control).map_err(|e| match e {
        TrySendError::Full(_) => SubmitError::ChannelFull,
        TrySendError::Disconnected(_) => SubmitError::Shutdown,
    })
}

impl Drop for RealtimeSimulation {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            self.stop();
        }
    }
}

impl fmt::Debug for RealtimeSimulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealtimeSimulation")
            .field("running", &self.is_running())
            .field("tick_interval", &self.tick_interval)
            .field("current_tick", &self.current_tick())
            .finish()
    }
}

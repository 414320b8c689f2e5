//! Tick loop and control channel draining for the realtime runner.
//!
//! The tick thread owns [`SimulationEngine`] exclusively (moved in via
//! `thread::spawn`) and hands it back through its `JoinHandle` on exit.
//! Control requests arrive on a bounded crossbeam channel and replies go
//! back on per-request channels. The only lock taken per tick is the brief
//! `SnapshotCell` swap when the new snapshot is published.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, info};

use outbreak_core::{Command, Receipt};

use crate::config::{ConfigError, Population, Speeds};
use crate::tick::SimulationEngine;

/// A request from a caller thread, paired with a reply channel.
pub(crate) enum Control {
    Submit {
        commands: Vec<Command>,
        reply: Sender<Vec<Receipt>>,
    },
    Reconfigure {
        population: Population,
        speeds: Speeds,
        strategy: String,
        reply: Sender<Result<(), ConfigError>>,
    },
}

/// State owned by the tick thread.
pub(crate) struct TickThreadState {
    engine: SimulationEngine,
    control_rx: Receiver<Control>,
    shutdown_flag: Arc<AtomicBool>,
    tick_stopped: Arc<AtomicBool>,
    tick_interval: Duration,
}

impl TickThreadState {
    pub fn new(
        engine: SimulationEngine,
        control_rx: Receiver<Control>,
        shutdown_flag: Arc<AtomicBool>,
        tick_stopped: Arc<AtomicBool>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            engine,
            control_rx,
            shutdown_flag,
            tick_stopped,
            tick_interval,
        }
    }

    /// Run the tick loop until the shutdown flag is set, then return the
    /// engine.
    ///
    /// The flag is checked once per iteration, so a tick that has started
    /// always completes.
    pub fn run(mut self) -> SimulationEngine {
        info!(
            interval_ms = self.tick_interval.as_millis() as u64,
            start_tick = %self.engine.current_tick(),
            "tick thread started"
        );
        let mut ticks_run: u64 = 0;
        loop {
            if self.shutdown_flag.load(Ordering::Acquire) {
                break;
            }

            let tick_start = Instant::now();

            // 1. Apply requests queued since the last tick.
            self.drain_control_channel();

            // 2. Execute tick (publishes and notifies).
            self.engine.execute_tick();
            ticks_run += 1;

            // 3. Sleep for the remaining budget.
            self.pace(tick_start + self.tick_interval);
        }

        self.tick_stopped.store(true, Ordering::Release);
        info!(ticks_run, tick = %self.engine.current_tick(), "tick thread stopped");
        self.engine
    }

    /// Park until `deadline`, waking early only for shutdown.
    ///
    /// `park_timeout` may return spuriously, so the deadline is rechecked.
    fn pace(&self, deadline: Instant) {
        loop {
            if self.shutdown_flag.load(Ordering::Acquire) {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            thread::park_timeout(deadline - now);
        }
    }

    /// Apply every pending control request.
    fn drain_control_channel(&mut self) {
        while let Ok(control) = self.control_rx.try_recv() {
            match control {
                Control::Submit { commands, reply } => {
                    let receipts = self.engine.submit(commands);
                    // Best-effort reply: the caller may have given up.
                    let _ = reply.send(receipts);
                }
                Control::Reconfigure {
                    population,
                    speeds,
                    strategy,
                    reply,
                } => {
                    let result = self.engine.reconfigure(population, speeds, &strategy);
                    if let Err(err) = &result {
                        debug!(%err, "reconfigure rejected");
                    }
                    let _ = reply.send(result);
                }
            }
        }
    }
}

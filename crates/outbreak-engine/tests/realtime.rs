//! Start/stop behaviour of the realtime runner and request delivery while
//! the tick thread is running.

use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use outbreak_core::{EntityKind, TickId};
use outbreak_engine::{
    ChannelObserver, ConfigError, Population, RealtimeSimulation, RunError, SimulationConfig,
    Speeds,
};
use outbreak_test_utils::{shelter_at, TickCounter};

fn passive_config(interval_ms: u64) -> SimulationConfig {
    SimulationConfig {
        population: Population::empty(),
        tick_interval: Duration::from_millis(interval_ms),
        ..SimulationConfig::default()
    }
}

/// Block until `n` more ticks have been signalled.
fn wait_for_ticks(rx: &Receiver<()>, n: usize) {
    for _ in 0..n {
        rx.recv_timeout(Duration::from_secs(2))
            .expect("tick thread stalled");
    }
}

/// Discard queued signals, then wait for one tick that started after now.
fn wait_for_fresh_tick(rx: &Receiver<()>) {
    while rx.try_recv().is_ok() {}
    wait_for_ticks(rx, 1);
}

fn running_with_channel(interval_ms: u64) -> (RealtimeSimulation, Receiver<()>) {
    let mut sim = RealtimeSimulation::new(passive_config(interval_ms)).unwrap();
    let (observer, rx) = ChannelObserver::channel();
    sim.add_observer(Box::new(observer)).unwrap();
    sim.start().unwrap();
    (sim, rx)
}

#[test]
fn notifications_match_completed_ticks() {
    let mut sim = RealtimeSimulation::new(passive_config(2)).unwrap();
    let counter = TickCounter::new();
    sim.add_observer(Box::new(counter.observer())).unwrap();
    sim.start().unwrap();
    assert!(sim.is_running());

    let deadline = Instant::now() + Duration::from_secs(2);
    while counter.count() < 5 {
        assert!(Instant::now() < deadline, "no progress");
        std::thread::sleep(Duration::from_millis(2));
    }

    let report = sim.stop();
    assert!(report.tick_joined);
    assert!(!sim.is_running());
    assert_eq!(report.final_tick, TickId(counter.count() as u64));
    assert_eq!(sim.current_tick(), report.final_tick);
}

#[test]
fn stop_wakes_a_parked_thread() {
    let (mut sim, rx) = running_with_channel(5_000);
    wait_for_ticks(&rx, 1);
    let start = Instant::now();
    let report = sim.stop();
    assert!(start.elapsed() < Duration::from_secs(2));
    assert_eq!(report.final_tick, TickId(1));
}

#[test]
fn mutations_while_running_apply_at_next_tick() {
    let (mut sim, rx) = running_with_channel(5);
    wait_for_ticks(&rx, 1);

    let id = sim.add_entity(shelter_at(100, 100)).unwrap();
    wait_for_fresh_tick(&rx);
    let snapshot = sim.entities();
    assert_eq!(snapshot.get(id).map(|e| e.kind()), Some(EntityKind::Shelter));

    assert_eq!(sim.remove_entity(id), Ok(true));
    assert_eq!(sim.remove_entity(id), Ok(false));
    wait_for_fresh_tick(&rx);
    assert!(sim.entities().get(id).is_none());

    sim.stop();
}

#[test]
fn reconfigure_while_running() {
    let (mut sim, rx) = running_with_channel(5);
    let population = Population {
        shelters: 3,
        axes: 4,
        ..Population::empty()
    };
    sim.reconfigure(population, Speeds::default(), "nearest").unwrap();
    wait_for_fresh_tick(&rx);
    let snapshot = sim.entities();
    assert_eq!(snapshot.len(), 7);
    assert_eq!(snapshot.count_of(EntityKind::Axe), 4);

    let rejected = sim.reconfigure(population, Speeds { human: 5, zombie: 0 }, "nearest");
    assert!(matches!(
        rejected,
        Err(RunError::Config(ConfigError::NonPositiveSpeed { .. }))
    ));

    sim.stop();
    let engine = sim.engine().unwrap();
    assert_eq!(engine.len(), 7);
    assert_eq!(engine.strategy_name(), "nearest_goal");
}

#[test]
fn restart_continues_the_tick_count() {
    let (mut sim, rx) = running_with_channel(2);
    wait_for_ticks(&rx, 2);
    let first = sim.stop().final_tick;
    // The observer travelled back with the engine.
    sim.start().unwrap();
    wait_for_fresh_tick(&rx);
    wait_for_ticks(&rx, 1);
    let second = sim.stop().final_tick;
    assert!(second.0 >= first.0 + 2);
}

#[test]
fn stopped_runner_reads_engine_directly() {
    let mut sim = RealtimeSimulation::new(passive_config(5)).unwrap();
    let id = sim.add_entity(shelter_at(10, 10)).unwrap();
    // Not published yet, but visible through the engine.
    assert!(sim.snapshot_cell().latest().get(id).is_none());
    assert!(sim.entities().get(id).is_some());
}

#[test]
fn drop_stops_the_tick_thread() {
    let (sim, rx) = running_with_channel(2);
    wait_for_ticks(&rx, 1);
    let cell = sim.snapshot_cell();
    drop(sim);
    let frozen = cell.latest().tick;
    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(cell.latest().tick, frozen);
}

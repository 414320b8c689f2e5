//! Outbreak headless run: a lockstep world followed by a realtime one.
//!
//! Demonstrates:
//!   1. Building a `SimulationEngine` from the default configuration
//!   2. Stepping it by hand and reading per-tick metrics
//!   3. Reconfiguring with a different strategy mid-run
//!   4. Handing the engine to `RealtimeSimulation` and watching ticks
//!      arrive over a channel
//!
//! Run with:
//!   RUST_LOG=outbreak_engine=debug cargo run --example headless

use std::time::Duration;

use outbreak_core::{EntityKind, Position};
use outbreak_engine::{
    ChannelObserver, Population, RealtimeSimulation, SimulationConfig, SimulationEngine, Speeds,
};
use outbreak_targeting::StrategyKind;

fn census_line(engine: &SimulationEngine) -> String {
    EntityKind::ALL
        .iter()
        .map(|&k| format!("{k}={}", engine.count_of(k)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    println!("=== Outbreak (headless) ===\n");

    // 1. Lockstep world with the proximity strategy.
    let config = SimulationConfig {
        strategy: StrategyKind::NearestGoal,
        seed: 42,
        tick_interval: Duration::from_millis(20),
        ..SimulationConfig::default()
    };
    let mut engine = SimulationEngine::new(config)?;
    println!("tick {:>3}: {}", engine.current_tick(), census_line(&engine));

    // 2. Step by hand.
    for _ in 0..60 {
        let result = engine.execute_tick();
        if result.tick.0 % 10 == 0 {
            let m = &result.metrics;
            println!(
                "tick {:>3}: {}  collisions={} spawned={} expired={} time={}μs",
                result.tick,
                census_line(&engine),
                m.collisions,
                m.spawned,
                m.expired,
                m.total_us,
            );
        }
    }

    // 3. Rebuild with an unknown strategy name: falls back to the random walk.
    let population = Population {
        humans: 30,
        zombies: 30,
        ..Population::default()
    };
    engine.reconfigure(population, Speeds::default(), "teleport")?;
    println!(
        "\nreconfigured: strategy={} {}",
        engine.strategy_name(),
        census_line(&engine)
    );

    // 4. Realtime: same engine, paced on a background thread.
    let (observer, ticks) = ChannelObserver::channel();
    engine.add_observer(Box::new(observer));
    let mut sim = RealtimeSimulation::from_engine(engine);
    sim.start()?;

    let id = sim.add_entity(outbreak_core::Entity::food(Position::new(500, 300), 90))?;
    println!("dropped food {id} into the running world");

    for _ in 0..25 {
        ticks.recv_timeout(Duration::from_secs(1))?;
    }
    let snapshot = sim.entities();
    println!(
        "tick {:>3}: humans={} zombies={} (live snapshot)",
        snapshot.tick,
        snapshot.count_of(EntityKind::Human),
        snapshot.count_of(EntityKind::Zombie),
    );

    let report = sim.stop();
    println!(
        "\nstopped after {} ticks in {}ms",
        report.final_tick, report.total_ms
    );
    Ok(())
}

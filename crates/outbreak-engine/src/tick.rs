//! Tick engine: the single-threaded simulation loop.
//!
//! [`SimulationEngine`] owns the entity collection, the targeting strategy
//! and the RNG, and advances the world one tick at a time:
//!
//! 1. **Update**: every entity, in collection order, against a census that
//!    tracks positions as they change.
//! 2. **Collide**: every eligible pair from an ID snapshot taken at the
//!    start of the phase; reactions emit commands that are applied before
//!    the next pair is considered.
//! 3. **Sweep**: drop everything whose lifespan ran out.
//! 4. **Publish** the snapshot and **notify** observers.
//!
//! There are no background threads here. [`RealtimeSimulation`](crate::RealtimeSimulation)
//! wraps this engine in a paced thread.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use outbreak_core::{
    Census, Command, CommandBuffer, Entity, EntityId, EntityKind, Outcome, ReactionContext,
    Receipt, TargetingStrategy, TickId, COLLISION_RADIUS, SHELTER_COLLISION_RADIUS,
};
use outbreak_targeting::StrategyKind;

use crate::config::{ConfigError, Population, SimulationConfig, Speeds};
use crate::factory::factories_for;
use crate::metrics::StepMetrics;
use crate::observer::TickObserver;
use crate::snapshot::{SnapshotCell, WorldSnapshot};

// ── TickResult ───────────────────────────────────────────────────

/// Result of one tick.
#[derive(Clone, Debug)]
pub struct TickResult {
    /// The tick that just completed.
    pub tick: TickId,
    /// Timings and population changes for this tick.
    pub metrics: StepMetrics,
}

// ── Collision rules ──────────────────────────────────────────────

/// Whether `a` and `b` are in contact this tick.
///
/// A pair is eligible when at least one side is a human or zombie and the
/// two kinds differ. Eligible pairs touch within [`COLLISION_RADIUS`], or
/// within [`SHELTER_COLLISION_RADIUS`] when either side is a shelter.
pub fn in_contact(a: &Entity, b: &Entity) -> bool {
    let (ka, kb) = (a.kind(), b.kind());
    if ka == kb || !(ka.is_active() || kb.is_active()) {
        return false;
    }
    let radius = if ka == EntityKind::Shelter || kb == EntityKind::Shelter {
        SHELTER_COLLISION_RADIUS
    } else {
        COLLISION_RADIUS
    };
    a.position.distance(b.position) <= radius
}

// ── SimulationEngine ─────────────────────────────────────────────

/// Single-threaded simulation engine.
///
/// Owns all simulation state and executes ticks synchronously. Each
/// [`execute_tick()`](Self::execute_tick) runs update, collision, and sweep,
/// publishes a snapshot to the shared [`SnapshotCell`], and notifies every
/// registered [`TickObserver`].
pub struct SimulationEngine {
    entities: IndexMap<EntityId, Entity>,
    strategy: Box<dyn TargetingStrategy>,
    strategy_kind: Option<StrategyKind>,
    rng: ChaCha8Rng,
    config: SimulationConfig,
    current_tick: TickId,
    next_entity_id: u64,
    observers: Vec<Box<dyn TickObserver>>,
    snapshot: Arc<SnapshotCell>,
    last_metrics: StepMetrics,
}

impl SimulationEngine {
    /// Construct an engine from a [`SimulationConfig`].
    ///
    /// Validates the configuration, seeds the RNG, builds the configured
    /// strategy, and populates the world from the configured counts.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let strategy = config.strategy.build();
        let kind = config.strategy;
        let mut engine = Self::with_strategy(config, strategy)?;
        engine.strategy_kind = Some(kind);
        Ok(engine)
    }

    /// Like [`new()`](Self::new), but moving with a caller-supplied strategy
    /// instead of `config.strategy`.
    pub fn with_strategy(
        config: SimulationConfig,
        strategy: Box<dyn TargetingStrategy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut engine = Self {
            entities: IndexMap::with_capacity(config.population.total()),
            strategy,
            strategy_kind: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            current_tick: TickId::default(),
            next_entity_id: 0,
            observers: Vec::new(),
            snapshot: Arc::new(SnapshotCell::default()),
            last_metrics: StepMetrics::default(),
        };
        let (population, speeds) = (engine.config.population, engine.config.speeds);
        engine.initialize(&population, &speeds);
        engine.publish();
        info!(
            entities = engine.entities.len(),
            strategy = engine.strategy.name(),
            seed = engine.config.seed,
            "simulation initialised"
        );
        Ok(engine)
    }

    // ── Population ───────────────────────────────────────────────

    /// Add entities from the factories, in order humans, zombies, shelters,
    /// food, axes. Existing entities are kept.
    pub fn initialize(&mut self, population: &Population, speeds: &Speeds) {
        for (factory, count) in factories_for(population, speeds) {
            for _ in 0..count {
                let entity = factory.create(&mut self.rng);
                self.add_entity(entity);
            }
        }
    }

    /// Insert an entity at the end of the collection and return its new ID.
    ///
    /// The position is clamped into the world for the entity's footprint.
    pub fn add_entity(&mut self, mut entity: Entity) -> EntityId {
        entity.position = entity.position.clamp_to_world(entity.kind().footprint());
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(id, entity);
        id
    }

    /// Remove an entity. Returns `false` if it was not present.
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        self.entities.shift_remove(&id).is_some()
    }

    /// Apply a single command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Spawn(entity) => Outcome::Spawned(self.add_entity(entity)),
            Command::Remove { entity_id } => {
                if self.remove_entity(entity_id) {
                    Outcome::Removed(entity_id)
                } else {
                    Outcome::AlreadyAbsent(entity_id)
                }
            }
        }
    }

    /// Apply a batch of commands in order, returning one receipt per command.
    pub fn submit(&mut self, commands: Vec<Command>) -> Vec<Receipt> {
        commands
            .into_iter()
            .enumerate()
            .map(|(command_index, command)| Receipt {
                command_index,
                applied_tick_id: self.current_tick,
                outcome: self.apply(command),
            })
            .collect()
    }

    /// Clear the world and rebuild it from new counts, speeds, and strategy.
    ///
    /// An unrecognised `strategy_name` selects the default strategy. The
    /// tick counter and the entity ID sequence carry on.
    pub fn reconfigure(
        &mut self,
        population: Population,
        speeds: Speeds,
        strategy_name: &str,
    ) -> Result<(), ConfigError> {
        speeds.validate()?;
        let kind = strategy_name.parse::<StrategyKind>().unwrap_or_else(|err| {
            debug!(%err, fallback = %StrategyKind::default(), "using default strategy");
            StrategyKind::default()
        });

        self.entities.clear();
        self.strategy = kind.build();
        self.strategy_kind = Some(kind);
        self.config.population = population;
        self.config.speeds = speeds;
        self.config.strategy = kind;
        self.initialize(&population, &speeds);
        self.publish();
        info!(
            entities = self.entities.len(),
            strategy = %kind,
            tick = %self.current_tick,
            "simulation reconfigured"
        );
        Ok(())
    }

    /// Move with `strategy` from the next tick on.
    pub fn set_strategy(&mut self, strategy: Box<dyn TargetingStrategy>) {
        self.strategy = strategy;
        self.strategy_kind = None;
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: Box<dyn TickObserver>) {
        self.observers.push(observer);
    }

    // ── Tick ─────────────────────────────────────────────────────

    /// Execute one complete tick.
    pub fn execute_tick(&mut self) -> TickResult {
        let tick_start = Instant::now();
        let mut metrics = StepMetrics::default();

        let phase = Instant::now();
        self.update_all();
        metrics.update_us = phase.elapsed().as_micros() as u64;

        let phase = Instant::now();
        self.resolve_collisions(&mut metrics);
        metrics.collision_us = phase.elapsed().as_micros() as u64;

        let phase = Instant::now();
        metrics.expired = self.sweep_expired();
        metrics.sweep_us = phase.elapsed().as_micros() as u64;

        self.current_tick = self.current_tick.next();

        let phase = Instant::now();
        self.publish();
        metrics.snapshot_publish_us = phase.elapsed().as_micros() as u64;

        metrics.live = self.entities.len();
        metrics.total_us = tick_start.elapsed().as_micros() as u64;
        debug!(
            tick = %self.current_tick,
            live = metrics.live,
            collisions = metrics.collisions,
            spawned = metrics.spawned,
            removed = metrics.collision_removals,
            expired = metrics.expired,
            total_us = metrics.total_us,
            "tick complete"
        );
        self.last_metrics = metrics.clone();

        for observer in &mut self.observers {
            observer.on_tick();
        }

        TickResult {
            tick: self.current_tick,
            metrics,
        }
    }

    fn update_all(&mut self) {
        let mut census: Census = self
            .entities
            .values()
            .map(|e| (e.kind(), e.position))
            .collect();
        for (index, entity) in self.entities.values_mut().enumerate() {
            entity.update(&census, self.strategy.as_ref(), &mut self.rng);
            census.relocate(index, entity.position);
        }
    }

    fn resolve_collisions(&mut self, metrics: &mut StepMetrics) {
        let order: Vec<EntityId> = self.entities.keys().copied().collect();
        let mut removed: HashSet<EntityId> = HashSet::new();
        let mut commands = CommandBuffer::new();
        let zombie_speed = self.config.speeds.zombie;

        for (i, &a_id) in order.iter().enumerate() {
            for &b_id in &order[i + 1..] {
                if removed.contains(&a_id) {
                    break;
                }
                if removed.contains(&b_id) {
                    continue;
                }
                let (Some(a), Some(b)) = (self.entities.get(&a_id), self.entities.get(&b_id))
                else {
                    continue;
                };
                if !in_contact(a, b) {
                    continue;
                }
                trace!(
                    a = %a_id, a_kind = %a.kind(),
                    b = %b_id, b_kind = %b.kind(),
                    "collision"
                );
                metrics.collisions += 1;
                let b_contact = b.contact(b_id);

                let mut ctx = ReactionContext {
                    rng: &mut self.rng,
                    zombie_speed,
                    commands: &mut commands,
                };
                let Some(a) = self.entities.get_mut(&a_id) else {
                    continue;
                };
                a.on_collision(a_id, &b_contact, &mut ctx);
                let a_contact = a.contact(a_id);
                if let Some(b) = self.entities.get_mut(&b_id) {
                    b.on_collision(b_id, &a_contact, &mut ctx);
                }

                for command in commands.drain(..) {
                    match self.apply(command) {
                        Outcome::Spawned(_) => metrics.spawned += 1,
                        Outcome::Removed(_) => metrics.collision_removals += 1,
                        Outcome::AlreadyAbsent(_) => {}
                    }
                }
                for id in [a_id, b_id] {
                    if !self.entities.contains_key(&id) {
                        removed.insert(id);
                    }
                }
            }
        }
    }

    fn sweep_expired(&mut self) -> u32 {
        let before = self.entities.len();
        self.entities.retain(|id, entity| {
            if entity.is_expired() {
                trace!(id = %id, kind = %entity.kind(), "expired");
                false
            } else {
                true
            }
        });
        (before - self.entities.len()) as u32
    }

    fn publish(&self) {
        self.snapshot.publish(self.entities());
    }

    // ── Accessors ────────────────────────────────────────────────

    /// An owned copy of every live entity, tagged with the current tick.
    pub fn entities(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.current_tick,
            entities: self
                .entities
                .iter()
                .map(|(id, e)| (*id, e.clone()))
                .collect(),
        }
    }

    /// One entity by ID.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of live entities of one kind.
    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.entities.values().filter(|e| e.kind() == kind).count()
    }

    /// The cell the engine publishes snapshots to after every tick.
    pub fn snapshot_cell(&self) -> Arc<SnapshotCell> {
        Arc::clone(&self.snapshot)
    }

    /// Number of ticks completed so far.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The built-in strategy in use, or `None` after [`set_strategy()`](Self::set_strategy).
    pub fn strategy_kind(&self) -> Option<StrategyKind> {
        self.strategy_kind
    }

    /// Name of the strategy in use.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// The active configuration, including any reconfiguration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

impl fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("entities", &self.entities.len())
            .field("strategy", &self.strategy.name())
            .field("current_tick", &self.current_tick)
            .field("next_entity_id", &self.next_entity_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use outbreak_core::{Mover, Position};
    use rand::RngCore;

    struct StayPut;

    impl TargetingStrategy for StayPut {
        fn name(&self) -> &str {
            "stay_put"
        }

        fn choose_next_target(
            &self,
            _mover: &Mover,
            current: Position,
            _goals: &[Position],
            _rng: &mut dyn RngCore,
        ) -> Position {
            current
        }
    }

    fn empty_engine() -> SimulationEngine {
        let config = SimulationConfig {
            population: Population::empty(),
            ..SimulationConfig::default()
        };
        SimulationEngine::with_strategy(config, Box::new(StayPut)).unwrap()
    }

    fn at(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    // ── Contact rules ────────────────────────────────────────────

    #[test]
    fn contact_requires_an_active_side_and_different_kinds() {
        let p = at(100, 100);
        let human = Entity::human(p, 50, 5);
        let zombie = Entity::zombie(p, 50, 3);
        let food = Entity::food(p, 50);
        let axe = Entity::axe(p, 50);
        let shelter = Entity::shelter(p, 50);

        assert!(in_contact(&human, &zombie));
        assert!(in_contact(&food, &human));
        assert!(in_contact(&zombie, &shelter));
        assert!(!in_contact(&human, &human.clone()));
        assert!(!in_contact(&zombie, &zombie.clone()));
        assert!(!in_contact(&food, &axe));
        assert!(!in_contact(&shelter, &food));
    }

    #[test]
    fn contact_radius_depends_on_shelter() {
        let human = Entity::human(at(100, 100), 50, 5);
        assert!(in_contact(&human, &Entity::zombie(at(105, 100), 50, 3)));
        assert!(!in_contact(&human, &Entity::zombie(at(106, 100), 50, 3)));
        assert!(in_contact(&human, &Entity::shelter(at(130, 140), 50)));
        assert!(!in_contact(&human, &Entity::shelter(at(131, 140), 50)));
    }

    // ── Engine basics ────────────────────────────────────────────

    #[test]
    fn default_config_populates_all_kinds() {
        let engine = SimulationEngine::new(SimulationConfig::default()).unwrap();
        assert_eq!(engine.len(), 170);
        assert_eq!(engine.count_of(EntityKind::Human), 100);
        assert_eq!(engine.count_of(EntityKind::Zombie), 50);
        assert_eq!(engine.count_of(EntityKind::Shelter), 5);
        assert_eq!(engine.count_of(EntityKind::Food), 5);
        assert_eq!(engine.count_of(EntityKind::Axe), 10);
        assert_eq!(engine.strategy_kind(), Some(StrategyKind::RandomStep));
        assert_eq!(engine.snapshot_cell().latest().len(), 170);
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = SimulationConfig::default();
        config.speeds.zombie = 0;
        assert!(matches!(
            SimulationEngine::new(config),
            Err(ConfigError::NonPositiveSpeed { .. })
        ));
    }

    #[test]
    fn ids_are_sequential_and_never_reused() {
        let mut engine = empty_engine();
        let a = engine.add_entity(Entity::food(at(1, 1), 50));
        let b = engine.add_entity(Entity::food(at(2, 2), 50));
        assert_eq!((a, b), (EntityId(0), EntityId(1)));
        assert!(engine.remove_entity(a));
        assert!(!engine.remove_entity(a));
        assert_eq!(engine.add_entity(Entity::food(at(3, 3), 50)), EntityId(2));
    }

    #[test]
    fn add_entity_clamps_into_world() {
        let mut engine = empty_engine();
        let id = engine.add_entity(Entity::shelter(at(2_000, -5), 150));
        assert_eq!(engine.entity(id).unwrap().position, at(950, 0));
    }

    #[test]
    fn submit_returns_one_receipt_per_command() {
        let mut engine = empty_engine();
        let id = engine.add_entity(Entity::axe(at(5, 5), 60));
        let receipts = engine.submit(vec![
            Command::Remove { entity_id: id },
            Command::Remove { entity_id: id },
            Command::Spawn(Entity::food(at(9, 9), 70)),
        ]);
        assert_eq!(receipts.len(), 3);
        assert_eq!(receipts[0].outcome, Outcome::Removed(id));
        assert_eq!(receipts[1].outcome, Outcome::AlreadyAbsent(id));
        assert!(matches!(receipts[2].outcome, Outcome::Spawned(_)));
        assert_eq!(receipts[2].command_index, 2);
        assert!(receipts.iter().all(|r| r.applied_tick_id == TickId(0)));
    }

    #[test]
    fn zero_entity_tick_still_notifies() {
        let mut engine = empty_engine();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        engine.add_observer(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let result = engine.execute_tick();
        assert_eq!(result.tick, TickId(1));
        assert_eq!(result.metrics.live, 0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(engine.snapshot_cell().latest().tick, TickId(1));
    }

    #[test]
    fn observers_run_in_registration_order() {
        let mut engine = empty_engine();
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));
        for name in ["first", "second"] {
            let log = Arc::clone(&log);
            engine.add_observer(Box::new(move || log.lock().unwrap().push(name)));
        }
        engine.execute_tick();
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    // ── Collision outcomes ───────────────────────────────────────

    #[test]
    fn infection_replaces_human_with_zombie() {
        let mut engine = empty_engine();
        let h = engine.add_entity(Entity::human(at(100, 100), 60, 5));
        let z = engine.add_entity(Entity::zombie(at(103, 100), 60, 3));
        let result = engine.execute_tick();

        assert!(engine.entity(h).is_none());
        assert!(engine.entity(z).is_some());
        assert_eq!(engine.count_of(EntityKind::Zombie), 2);
        assert_eq!(engine.len(), 2);
        let (_, spawned) = engine
            .entities()
            .of_kind(EntityKind::Zombie)
            .find(|(id, _)| *id != z)
            .map(|(id, e)| (id, e.clone()))
            .unwrap();
        assert_eq!(spawned.position, at(100, 100));
        assert!((100..200).contains(&spawned.lifespan));
        assert_eq!(spawned.speed(), Some(3));
        assert_eq!(result.metrics.spawned, 1);
        assert_eq!(result.metrics.collision_removals, 1);
    }

    #[test]
    fn infected_human_cannot_collide_again() {
        let mut engine = empty_engine();
        engine.add_entity(Entity::human(at(100, 100), 60, 5));
        engine.add_entity(Entity::zombie(at(101, 100), 60, 3));
        engine.add_entity(Entity::zombie(at(100, 101), 60, 3));
        let result = engine.execute_tick();
        assert_eq!(result.metrics.spawned, 1);
        assert_eq!(engine.count_of(EntityKind::Human), 0);
        assert_eq!(engine.count_of(EntityKind::Zombie), 3);
    }

    #[test]
    fn armed_human_kills_zombie() {
        let mut engine = empty_engine();
        let h = engine.add_entity(Entity::human(at(100, 100), 60, 5).with_attack_window(20));
        let z = engine.add_entity(Entity::zombie(at(100, 104), 60, 3));
        engine.execute_tick();
        assert!(engine.entity(z).is_none());
        let human = engine.entity(h).unwrap();
        assert_eq!(human.attack_window(), Some(19));
        assert_eq!(engine.count_of(EntityKind::Zombie), 0);
    }

    #[test]
    fn food_heals_and_axe_arms() {
        let mut engine = empty_engine();
        let h1 = engine.add_entity(Entity::human(at(100, 100), 3, 5));
        let food = engine.add_entity(Entity::food(at(100, 100), 60));
        let h2 = engine.add_entity(Entity::human(at(500, 300), 3, 5));
        let axe = engine.add_entity(Entity::axe(at(502, 300), 60));
        engine.execute_tick();

        assert!(engine.entity(food).is_none());
        assert!(engine.entity(axe).is_none());
        assert_eq!(engine.entity(h1).unwrap().lifespan, 100);
        let armed = engine.entity(h2).unwrap();
        assert_eq!(armed.lifespan, 100);
        assert!((50..100).contains(&armed.attack_window().unwrap()));
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn shelter_destroys_zombie_and_shelters_human() {
        let mut engine = empty_engine();
        let shelter = engine.add_entity(Entity::shelter(at(200, 200), 150));
        let z = engine.add_entity(Entity::zombie(at(240, 200), 60, 3));
        let h = engine.add_entity(Entity::human(at(200, 230), 60, 5));
        engine.execute_tick();

        assert!(engine.entity(z).is_none());
        assert!(engine.entity(shelter).is_some());
        let human = engine.entity(h).unwrap();
        assert!((human.position.x - 200).abs() <= 2);
        assert!((human.position.y - 230).abs() <= 2);
        assert_eq!(human.lifespan, 59);
    }

    #[test]
    fn same_kind_and_passive_pairs_do_not_react() {
        let mut engine = empty_engine();
        engine.add_entity(Entity::human(at(10, 10), 60, 5));
        engine.add_entity(Entity::human(at(10, 10), 60, 5));
        engine.add_entity(Entity::food(at(300, 300), 60));
        engine.add_entity(Entity::axe(at(300, 300), 60));
        let result = engine.execute_tick();
        assert_eq!(result.metrics.collisions, 0);
        assert_eq!(engine.len(), 4);
    }

    // ── Sweep ────────────────────────────────────────────────────

    #[test]
    fn sweep_removes_expired_entities() {
        let mut engine = empty_engine();
        let dying = engine.add_entity(Entity::axe(at(10, 10), 1));
        let alive = engine.add_entity(Entity::axe(at(50, 50), 2));
        let result = engine.execute_tick();
        assert!(engine.entity(dying).is_none());
        assert_eq!(engine.entity(alive).unwrap().lifespan, 1);
        assert_eq!(result.metrics.expired, 1);
    }

    #[test]
    fn healing_collision_saves_a_dying_human() {
        let mut engine = empty_engine();
        let h = engine.add_entity(Entity::human(at(10, 10), 1, 5));
        engine.add_entity(Entity::food(at(12, 10), 60));
        engine.execute_tick();
        assert_eq!(engine.entity(h).unwrap().lifespan, 100);
    }

    // ── Reconfigure ──────────────────────────────────────────────

    #[test]
    fn reconfigure_rebuilds_and_keeps_tick() {
        let mut engine = empty_engine();
        engine.execute_tick();
        engine.execute_tick();
        let population = Population {
            humans: 3,
            zombies: 2,
            shelters: 1,
            food: 0,
            axes: 4,
        };
        engine
            .reconfigure(population, Speeds { human: 9, zombie: 4 }, "nearest")
            .unwrap();
        assert_eq!(engine.len(), 10);
        assert_eq!(engine.current_tick(), TickId(2));
        assert_eq!(engine.strategy_kind(), Some(StrategyKind::NearestGoal));
        assert_eq!(engine.config().speeds.zombie, 4);
        assert_eq!(engine.snapshot_cell().latest().len(), 10);
    }

    #[test]
    fn reconfigure_unknown_strategy_falls_back() {
        let mut engine = empty_engine();
        engine
            .reconfigure(Population::empty(), Speeds::default(), "teleport")
            .unwrap();
        assert_eq!(engine.strategy_kind(), Some(StrategyKind::RandomStep));
        assert_eq!(engine.strategy_name(), "random_step");
    }

    #[test]
    fn reconfigure_rejects_zero_speed() {
        let mut engine = empty_engine();
        engine.add_entity(Entity::food(at(1, 1), 60));
        let err = engine
            .reconfigure(Population::empty(), Speeds { human: 0, zombie: 3 }, "random")
            .unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveSpeed { .. }));
        assert_eq!(engine.len(), 1);
    }
}

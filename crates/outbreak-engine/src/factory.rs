//! Entity factories used to populate the world.
//!
//! Each factory produces one kind of entity at a uniformly random position
//! that keeps its footprint inside the world, with a uniformly random
//! starting lifespan.

use std::ops::Range;

use outbreak_core::geometry::{max_x, max_y};
use outbreak_core::{Entity, EntityKind, Position};
use rand::{Rng, RngCore};

use crate::config::{Population, Speeds};

/// Starting lifespan for humans, zombies, axes, and food.
pub const MOBILE_AND_ITEM_LIFESPAN: Range<i32> = 50..100;

/// Starting lifespan for shelters.
pub const SHELTER_LIFESPAN: Range<i32> = 100..200;

/// Produces fresh entities of a single kind.
pub trait EntityFactory {
    /// The kind this factory creates.
    fn kind(&self) -> EntityKind;

    /// Create one entity, drawing position and lifespan from `rng`.
    fn create(&self, rng: &mut dyn RngCore) -> Entity;
}

fn random_position(kind: EntityKind, rng: &mut dyn RngCore) -> Position {
    let footprint = kind.footprint();
    Position::new(
        rng.random_range(0..max_x(footprint)),
        rng.random_range(0..max_y(footprint)),
    )
}

/// Humans moving at a fixed speed.
#[derive(Clone, Copy, Debug)]
pub struct HumanFactory {
    /// Speed given to every human created.
    pub speed: u32,
}

impl EntityFactory for HumanFactory {
    fn kind(&self) -> EntityKind {
        EntityKind::Human
    }

    fn create(&self, rng: &mut dyn RngCore) -> Entity {
        let position = random_position(EntityKind::Human, rng);
        let lifespan = rng.random_range(MOBILE_AND_ITEM_LIFESPAN);
        Entity::human(position, lifespan, self.speed)
    }
}

/// Zombies moving at a fixed speed.
#[derive(Clone, Copy, Debug)]
pub struct ZombieFactory {
    /// Speed given to every zombie created.
    pub speed: u32,
}

impl EntityFactory for ZombieFactory {
    fn kind(&self) -> EntityKind {
        EntityKind::Zombie
    }

    fn create(&self, rng: &mut dyn RngCore) -> Entity {
        let position = random_position(EntityKind::Zombie, rng);
        let lifespan = rng.random_range(MOBILE_AND_ITEM_LIFESPAN);
        Entity::zombie(position, lifespan, self.speed)
    }
}

/// Shelters.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShelterFactory;

impl EntityFactory for ShelterFactory {
    fn kind(&self) -> EntityKind {
        EntityKind::Shelter
    }

    fn create(&self, rng: &mut dyn RngCore) -> Entity {
        let position = random_position(EntityKind::Shelter, rng);
        let lifespan = rng.random_range(SHELTER_LIFESPAN);
        Entity::shelter(position, lifespan)
    }
}

/// Food items.
#[derive(Clone, Copy, Debug, Default)]
pub struct FoodFactory;

impl EntityFactory for FoodFactory {
    fn kind(&self) -> EntityKind {
        EntityKind::Food
    }

    fn create(&self, rng: &mut dyn RngCore) -> Entity {
        let position = random_position(EntityKind::Food, rng);
        let lifespan = rng.random_range(MOBILE_AND_ITEM_LIFESPAN);
        Entity::food(position, lifespan)
    }
}

/// Axes.
#[derive(Clone, Copy, Debug, Default)]
pub struct AxeFactory;

impl EntityFactory for AxeFactory {
    fn kind(&self) -> EntityKind {
        EntityKind::Axe
    }

    fn create(&self, rng: &mut dyn RngCore) -> Entity {
        let position = random_position(EntityKind::Axe, rng);
        let lifespan = rng.random_range(MOBILE_AND_ITEM_LIFESPAN);
        Entity::axe(position, lifespan)
    }
}

/// One factory per kind, paired with its configured count, in
/// initialisation order: humans, zombies, shelters, food, axes.
pub fn factories_for(
    population: &Population,
    speeds: &Speeds,
) -> Vec<(Box<dyn EntityFactory>, usize)> {
    EntityKind::ALL
        .iter()
        .map(|&kind| {
            let factory: Box<dyn EntityFactory> = match kind {
                EntityKind::Human => Box::new(HumanFactory { speed: speeds.human }),
                EntityKind::Zombie => Box::new(ZombieFactory {
                    speed: speeds.zombie,
                }),
                EntityKind::Shelter => Box::new(ShelterFactory),
                EntityKind::Food => Box::new(FoodFactory),
                EntityKind::Axe => Box::new(AxeFactory),
            };
            (factory, population.count(kind))
        })
        .collect()
}

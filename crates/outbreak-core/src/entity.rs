//! The entity model and its per-variant state machines.
//!
//! Every entity has a position and a lifespan. What it does each tick and
//! how it reacts to contact depends on its [`Body`]:
//!
//! | Body    | `update()`                                  | `on_collision()`                         |
//! |---------|---------------------------------------------|------------------------------------------|
//! | Human   | decay, pick goals by priority, move         | infection / kill / heal / arm / jitter   |
//! | Zombie  | decay, chase humans                         | removes itself on reaching a shelter     |
//! | Axe     | decay                                       | none                                     |
//! | Food    | decay                                       | none                                     |
//! | Shelter | decay                                       | none                                     |
//!
//! Reactions never mutate the collection. They push [`Command`]s into the
//! [`ReactionContext`] and the engine applies them.

use std::fmt;

use rand::{Rng, RngCore};

use crate::census::Census;
use crate::command::{Command, CommandBuffer};
use crate::geometry::{max_x, max_y, Position, SHELTER_FOOTPRINT, SMALL_FOOTPRINT};
use crate::id::EntityId;
use crate::traits::{Mover, TargetingStrategy};

/// Lifespan a human is restored to by food or an axe.
pub const RESTORED_LIFESPAN: i32 = 100;

/// A human whose lifespan is at or below this goes looking for items
/// even when a shelter exists.
pub const HUNGER_THRESHOLD: i32 = 10;

/// Half-open range of an axe's attack window.
pub const ATTACK_WINDOW_RANGE: std::ops::Range<u32> = 50..100;

/// Half-open range of the lifespan of a freshly infected zombie.
pub const INFECTED_LIFESPAN_RANGE: std::ops::Range<i32> = 100..200;

/// Largest per-axis displacement of a human idling in a shelter.
pub const JITTER: i32 = 2;

// ── EntityKind ──────────────────────────────────────────────────

/// Fieldless tag of an entity variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// Mobile; seeks shelter and items, flees by hiding.
    Human,
    /// Mobile; chases humans.
    Zombie,
    /// Passive; arms a human.
    Axe,
    /// Passive; heals a human.
    Food,
    /// Passive; hides humans and destroys zombies.
    Shelter,
}

impl EntityKind {
    /// Every kind, in initialisation order.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Human,
        EntityKind::Zombie,
        EntityKind::Shelter,
        EntityKind::Food,
        EntityKind::Axe,
    ];

    /// Whether entities of this kind move and drive collisions.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Human | Self::Zombie)
    }

    /// Whether this kind can be picked up by a human.
    pub fn is_item(self) -> bool {
        matches!(self, Self::Axe | Self::Food)
    }

    /// Size used to clamp positions of this kind.
    pub fn footprint(self) -> i32 {
        match self {
            Self::Shelter => SHELTER_FOOTPRINT,
            Self::Human | Self::Zombie | Self::Axe | Self::Food => SMALL_FOOTPRINT,
        }
    }

    /// Lower-case name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Zombie => "zombie",
            Self::Axe => "axe",
            Self::Food => "food",
            Self::Shelter => "shelter",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Body ────────────────────────────────────────────────────────

/// Variant-specific state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Body {
    /// A survivor.
    Human {
        /// Creation-time speed (informational).
        speed: u32,
        /// Ticks of combat stance left; nonzero means armed.
        attack_window: u32,
    },
    /// An infected.
    Zombie {
        /// Creation-time speed (informational).
        speed: u32,
    },
    /// A weapon pickup.
    Axe,
    /// A healing pickup.
    Food,
    /// A safe zone.
    Shelter,
}

impl Body {
    /// The fieldless tag of this body.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Human { .. } => EntityKind::Human,
            Self::Zombie { .. } => EntityKind::Zombie,
            Self::Axe => EntityKind::Axe,
            Self::Food => EntityKind::Food,
            Self::Shelter => EntityKind::Shelter,
        }
    }
}

// ── Contact / ReactionContext ───────────────────────────────────

/// What one party of a collision knows about the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    /// The other entity's ID.
    pub id: EntityId,
    /// The other entity's kind.
    pub kind: EntityKind,
    /// The other entity's position at the moment of contact.
    pub position: Position,
}

/// Everything a collision reaction may use besides the two entities.
pub struct ReactionContext<'a> {
    /// The simulation's single random source.
    pub rng: &'a mut dyn RngCore,
    /// Speed given to zombies created by infection.
    pub zombie_speed: u32,
    /// Where spawn/remove requests go.
    pub commands: &'a mut CommandBuffer,
}

// ── Entity ──────────────────────────────────────────────────────

/// A simulated entity: a [`Body`] at a [`Position`] with a lifespan.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Variant-specific state.
    pub body: Body,
    /// Top-left corner of the footprint.
    pub position: Position,
    /// Ticks left to live; the entity is swept once this is `<= 0`.
    pub lifespan: i32,
}

impl Entity {
    /// A human at `position` with no attack window.
    pub fn human(position: Position, lifespan: i32, speed: u32) -> Self {
        Self {
            body: Body::Human {
                speed,
                attack_window: 0,
            },
            position,
            lifespan,
        }
    }

    /// A zombie at `position`.
    pub fn zombie(position: Position, lifespan: i32, speed: u32) -> Self {
        Self {
            body: Body::Zombie { speed },
            position,
            lifespan,
        }
    }

    /// An axe at `position`.
    pub fn axe(position: Position, lifespan: i32) -> Self {
        Self {
            body: Body::Axe,
            position,
            lifespan,
        }
    }

    /// A food item at `position`.
    pub fn food(position: Position, lifespan: i32) -> Self {
        Self {
            body: Body::Food,
            position,
            lifespan,
        }
    }

    /// A shelter at `position`.
    pub fn shelter(position: Position, lifespan: i32) -> Self {
        Self {
            body: Body::Shelter,
            position,
            lifespan,
        }
    }

    /// Builder-style override of a human's attack window. No-op for other bodies.
    pub fn with_attack_window(mut self, window: u32) -> Self {
        if let Body::Human { attack_window, .. } = &mut self.body {
            *attack_window = window;
        }
        self
    }

    /// The fieldless tag of this entity.
    pub fn kind(&self) -> EntityKind {
        self.body.kind()
    }

    /// Creation-time speed of a mobile entity.
    pub fn speed(&self) -> Option<u32> {
        match self.body {
            Body::Human { speed, .. } | Body::Zombie { speed } => Some(speed),
            Body::Axe | Body::Food | Body::Shelter => None,
        }
    }

    /// Remaining attack window of a human.
    pub fn attack_window(&self) -> Option<u32> {
        match self.body {
            Body::Human { attack_window, .. } => Some(attack_window),
            _ => None,
        }
    }

    /// Whether the lifespan sweep should remove this entity.
    pub fn is_expired(&self) -> bool {
        self.lifespan <= 0
    }

    /// The view of this entity handed to its collision partner.
    pub fn contact(&self, id: EntityId) -> Contact {
        Contact {
            id,
            kind: self.kind(),
            position: self.position,
        }
    }

    /// Advance this entity by one tick.
    ///
    /// Decrements the lifespan by exactly one and, for mobile bodies, moves
    /// toward the goal set chosen from `census`.
    pub fn update(
        &mut self,
        census: &Census,
        strategy: &dyn TargetingStrategy,
        rng: &mut dyn RngCore,
    ) {
        match self.body {
            Body::Human { .. } => self.update_human(census, strategy, rng),
            Body::Zombie { .. } => {
                self.lifespan = self.lifespan.saturating_sub(1);
                let humans = census.positions_of(EntityKind::Human);
                self.move_toward(&humans, strategy, rng);
            }
            Body::Axe | Body::Food | Body::Shelter => {
                self.lifespan = self.lifespan.saturating_sub(1);
            }
        }
    }

    fn update_human(
        &mut self,
        census: &Census,
        strategy: &dyn TargetingStrategy,
        rng: &mut dyn RngCore,
    ) {
        let armed = match &mut self.body {
            Body::Human { attack_window, .. } => {
                *attack_window = attack_window.saturating_sub(1);
                *attack_window > 0
            }
            _ => false,
        };
        self.lifespan = self.lifespan.saturating_sub(1);

        let zombies = census.positions_of(EntityKind::Zombie);
        let items = census.positions_where(EntityKind::is_item);
        let shelters = census.positions_of(EntityKind::Shelter);

        let goals = if armed && !zombies.is_empty() {
            zombies
        } else if (self.lifespan <= HUNGER_THRESHOLD || shelters.is_empty()) && !items.is_empty()
        {
            items
        } else if !shelters.is_empty() {
            shelters
        } else {
            vec![Position::new(
                rng.random_range(0..max_x(SMALL_FOOTPRINT)),
                rng.random_range(0..max_y(SMALL_FOOTPRINT)),
            )]
        };

        self.move_toward(&goals, strategy, rng);
    }

    fn move_toward(
        &mut self,
        goals: &[Position],
        strategy: &dyn TargetingStrategy,
        rng: &mut dyn RngCore,
    ) {
        if goals.is_empty() {
            return;
        }
        let mover = Mover {
            kind: self.kind(),
            speed: self.speed().unwrap_or(0),
        };
        let next = strategy.choose_next_target(&mover, self.position, goals, rng);
        self.position = next.clamp_to_world(self.kind().footprint());
    }

    /// React to touching `other`.
    ///
    /// `me` is this entity's own ID, used to request its own removal.
    pub fn on_collision(&mut self, me: EntityId, other: &Contact, ctx: &mut ReactionContext<'_>) {
        match self.body {
            Body::Human { .. } => self.human_collision(me, other, ctx),
            Body::Zombie { .. } => {
                if other.kind == EntityKind::Shelter {
                    ctx.commands.push(Command::Remove { entity_id: me });
                }
            }
            Body::Axe | Body::Food | Body::Shelter => {}
        }
    }

    fn human_collision(&mut self, me: EntityId, other: &Contact, ctx: &mut ReactionContext<'_>) {
        let Body::Human { attack_window, .. } = &mut self.body else {
            return;
        };
        match other.kind {
            EntityKind::Zombie if *attack_window > 0 => {
                ctx.commands.push(Command::Remove { entity_id: other.id });
            }
            EntityKind::Zombie => {
                let lifespan = ctx.rng.random_range(INFECTED_LIFESPAN_RANGE);
                ctx.commands.push(Command::Spawn(Entity::zombie(
                    self.position,
                    lifespan,
                    ctx.zombie_speed,
                )));
                ctx.commands.push(Command::Remove { entity_id: me });
            }
            EntityKind::Food => {
                self.lifespan = RESTORED_LIFESPAN;
                ctx.commands.push(Command::Remove { entity_id: other.id });
            }
            EntityKind::Axe => {
                self.lifespan = RESTORED_LIFESPAN;
                *attack_window = ctx.rng.random_range(ATTACK_WINDOW_RANGE);
                ctx.commands.push(Command::Remove { entity_id: other.id });
            }
            EntityKind::Human | EntityKind::Shelter => {
                let dx = ctx.rng.random_range(-JITTER..=JITTER);
                let dy = ctx.rng.random_range(-JITTER..=JITTER);
                self.position = self
                    .position
                    .offset(dx, dy)
                    .clamp_to_world(SMALL_FOOTPRINT);
            }
        }
    }
}

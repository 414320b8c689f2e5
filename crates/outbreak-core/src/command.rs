//! Spawn and remove requests, and the receipts returned for them.
//!
//! Entities never touch the collection they live in. A collision reaction
//! pushes [`Command`]s into a [`CommandBuffer`]; the engine applies them in
//! emission order once both sides of the pair have reacted. External callers
//! submit the same commands through the engine or the realtime runner.

use smallvec::SmallVec;

use crate::entity::Entity;
use crate::id::{EntityId, TickId};

/// A mutation of the entity collection.
///
/// # Examples
///
/// ```
/// use outbreak_core::{Command, Entity, EntityId, Position};
///
/// let spawn = Command::Spawn(Entity::food(Position::new(10, 20), 75));
/// let remove = Command::Remove { entity_id: EntityId(3) };
///
/// assert!(matches!(spawn, Command::Spawn(_)));
/// assert_eq!(remove, Command::Remove { entity_id: EntityId(3) });
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Insert a new entity. The engine assigns its ID.
    Spawn(Entity),
    /// Remove an entity. Removing an absent entity is a no-op.
    Remove {
        /// The entity to remove.
        entity_id: EntityId,
    },
}

/// Commands emitted by a single collision pair.
///
/// The largest reaction (infection) emits two commands, so the buffer never
/// spills in practice.
pub type CommandBuffer = SmallVec<[Command; 4]>;

/// What applying a [`Command`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A new entity was inserted under this ID.
    Spawned(EntityId),
    /// The entity was present and has been removed.
    Removed(EntityId),
    /// The entity was not present; nothing changed.
    AlreadyAbsent(EntityId),
}

impl Outcome {
    /// The entity the command concerned.
    pub fn entity_id(self) -> EntityId {
        match self {
            Self::Spawned(id) | Self::Removed(id) | Self::AlreadyAbsent(id) => id,
        }
    }
}

/// Receipt returned for each externally submitted command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Index of this command within the submitted batch.
    pub command_index: usize,
    /// Tick counter at the moment the command was applied.
    ///
    /// Commands applied between ticks report the last completed tick.
    pub applied_tick_id: TickId,
    /// What the command did.
    pub outcome: Outcome,
}

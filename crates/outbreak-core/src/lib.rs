//! Core types and traits for the Outbreak simulation.
//!
//! This is the leaf crate of the workspace. It defines the identifiers,
//! world geometry, the entity model with its per-variant state machines,
//! the command vocabulary entities use to ask for spawns and removals, and
//! the [`TargetingStrategy`] seam that movement goes through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod census;
pub mod command;
pub mod entity;
pub mod geometry;
pub mod id;
pub mod traits;

pub use census::Census;
pub use command::{Command, CommandBuffer, Outcome, Receipt};
pub use entity::{Body, Contact, Entity, EntityKind, ReactionContext};
pub use geometry::{
    Position, COLLISION_RADIUS, MAX_STEP, SHELTER_COLLISION_RADIUS, SHELTER_FOOTPRINT,
    SMALL_FOOTPRINT, WORLD_HEIGHT, WORLD_WIDTH,
};
pub use id::{EntityId, TickId};
pub use traits::{Mover, TargetingStrategy};

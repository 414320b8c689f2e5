//! Read-only views of the world.
//!
//! [`WorldSnapshot`] is an owned copy of every live entity at a tick
//! boundary. [`SnapshotCell`] holds the most recently published one behind
//! an `Arc` so readers on other threads can grab it without copying.

use std::sync::{Arc, Mutex, PoisonError};

use outbreak_core::{Entity, EntityId, EntityKind, TickId};

/// Every live entity at one tick boundary, in collection order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorldSnapshot {
    /// The tick this snapshot was taken after.
    pub tick: TickId,
    /// `(id, entity)` pairs in insertion order.
    pub entities: Vec<(EntityId, Entity)>,
}

impl WorldSnapshot {
    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world was empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Look up one entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities
            .iter()
            .find_map(|(eid, e)| (*eid == id).then_some(e))
    }

    /// Iterate over `(id, entity)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(id, e)| (*id, e))
    }

    /// Entities of one kind.
    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.iter().filter(move |(_, e)| e.kind() == kind)
    }

    /// Number of entities of one kind.
    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.of_kind(kind).count()
    }
}

/// Shared slot holding the latest published [`WorldSnapshot`].
#[derive(Debug, Default)]
pub struct SnapshotCell {
    latest: Mutex<Arc<WorldSnapshot>>,
}

impl SnapshotCell {
    /// A cell initially holding `snapshot`.
    pub fn new(snapshot: WorldSnapshot) -> Self {
        Self {
            latest: Mutex::new(Arc::new(snapshot)),
        }
    }

    /// Replace the held snapshot.
    pub fn publish(&self, snapshot: WorldSnapshot) {
        let snapshot = Arc::new(snapshot);
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = snapshot;
    }

    /// The most recently published snapshot.
    pub fn latest(&self) -> Arc<WorldSnapshot> {
        Arc::clone(&self.latest.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

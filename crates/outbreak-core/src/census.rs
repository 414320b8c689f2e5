//! Per-tick listing of where every entity is.
//!
//! Entities never look at the engine's collection directly. Before the
//! update phase the engine takes a [`Census`] of `(kind, position)` pairs in
//! collection order and patches each row as its entity moves, so later
//! movers see earlier movers' new positions within the same phase.

use crate::entity::EntityKind;
use crate::geometry::Position;

/// Kind and position of every entity, in collection order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Census {
    rows: Vec<(EntityKind, Position)>,
}

impl Census {
    /// An empty census.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the census has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Record the new position of the entity at `index`.
    ///
    /// Out-of-range indices are ignored.
    pub fn relocate(&mut self, index: usize, position: Position) {
        if let Some(row) = self.rows.get_mut(index) {
            row.1 = position;
        }
    }

    /// Positions of every entity whose kind satisfies `filter`, in order.
    pub fn positions_where(&self, filter: impl Fn(EntityKind) -> bool) -> Vec<Position> {
        self.rows
            .iter()
            .filter(|(kind, _)| filter(*kind))
            .map(|(_, pos)| *pos)
            .collect()
    }

    /// Positions of every entity of exactly `kind`, in order.
    pub fn positions_of(&self, kind: EntityKind) -> Vec<Position> {
        self.positions_where(|k| k == kind)
    }

    /// Whether any entity of `kind` is present.
    pub fn contains(&self, kind: EntityKind) -> bool {
        self.rows.iter().any(|(k, _)| *k == kind)
    }
}

impl FromIterator<(EntityKind, Position)> for Census {
    fn from_iter<I: IntoIterator<Item = (EntityKind, Position)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

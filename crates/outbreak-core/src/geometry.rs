//! World geometry: [`Position`] and the fixed world constants.
//!
//! The world is a `WORLD_WIDTH × WORLD_HEIGHT` rectangle with the origin at
//! the top-left corner. An entity's position is the corner of its footprint,
//! so the reachable range on each axis is `[0, extent - footprint]`.

use std::fmt;

/// Width of the world in units.
pub const WORLD_WIDTH: i32 = 1000;
/// Height of the world in units.
pub const WORLD_HEIGHT: i32 = 600;

/// Footprint of humans, zombies and items.
pub const SMALL_FOOTPRINT: i32 = 10;
/// Footprint of shelters.
pub const SHELTER_FOOTPRINT: i32 = 50;

/// Contact distance for ordinary pairs.
pub const COLLISION_RADIUS: f64 = 5.0;
/// Contact distance for any pair involving a shelter.
pub const SHELTER_COLLISION_RADIUS: f64 = 50.0;

/// Longest move a targeting strategy may make in one tick.
pub const MAX_STEP: i32 = 10;

/// An integer point in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal coordinate, growing rightwards.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl Position {
    /// Construct a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// Squares are summed in `i64` so the result is exact for every pair of
    /// in-world points before the final square root.
    pub fn distance(self, other: Position) -> f64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        ((dx * dx + dy * dy) as f64).sqrt()
    }

    /// Offset by `(dx, dy)` without clamping.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Clamp into `[0, WORLD_WIDTH - footprint] × [0, WORLD_HEIGHT - footprint]`.
    pub fn clamp_to_world(self, footprint: i32) -> Self {
        Self {
            x: self.x.clamp(0, max_x(footprint)),
            y: self.y.clamp(0, max_y(footprint)),
        }
    }

    /// Whether this position already satisfies [`clamp_to_world`](Self::clamp_to_world).
    pub fn is_within_world(self, footprint: i32) -> bool {
        (0..=max_x(footprint)).contains(&self.x) && (0..=max_y(footprint)).contains(&self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Largest x coordinate an entity with `footprint` may occupy.
pub const fn max_x(footprint: i32) -> i32 {
    WORLD_WIDTH - footprint
}

/// Largest y coordinate an entity with `footprint` may occupy.
pub const fn max_y(footprint: i32) -> i32 {
    WORLD_HEIGHT - footprint
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Position::new(0, 0).distance(Position::new(3, 4)), 5.0);
        assert_eq!(Position::new(7, 7).distance(Position::new(7, 7)), 0.0);
    }

    #[test]
    fn clamp_uses_footprint() {
        let p = Position::new(2000, -30);
        assert_eq!(p.clamp_to_world(SMALL_FOOTPRINT), Position::new(990, 0));
        assert_eq!(p.clamp_to_world(SHELTER_FOOTPRINT), Position::new(950, 0));
        assert_eq!(
            Position::new(5, 700).clamp_to_world(SMALL_FOOTPRINT),
            Position::new(5, 590)
        );
    }

    #[test]
    fn offset_saturates() {
        let p = Position::new(i32::MAX, 0).offset(5, -5);
        assert_eq!(p, Position::new(i32::MAX, -5));
    }

    proptest! {
        #[test]
        fn clamped_positions_are_within_world(x in any::<i32>(), y in any::<i32>()) {
            for footprint in [SMALL_FOOTPRINT, SHELTER_FOOTPRINT] {
                let p = Position::new(x, y).clamp_to_world(footprint);
                prop_assert!(p.is_within_world(footprint));
            }
        }

        #[test]
        fn distance_is_symmetric(
            ax in 0..WORLD_WIDTH, ay in 0..WORLD_HEIGHT,
            bx in 0..WORLD_WIDTH, by in 0..WORLD_HEIGHT,
        ) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            prop_assert_eq!(a.distance(b), b.distance(a));
        }
    }
}

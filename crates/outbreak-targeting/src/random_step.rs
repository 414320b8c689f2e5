//! Goal-agnostic random walk.
//!
//! Any non-empty goal set triggers one step drawn uniformly from the integer
//! lattice points of the disc of radius `max_step` around the mover
//! (including the centre). Goals themselves are not consulted, so this is
//! the "panic" policy: entities drift instead of pursuing anything.

use outbreak_core::{Mover, Position, TargetingStrategy, MAX_STEP};
use rand::{Rng, RngCore};

/// Uniform lattice step within a disc of radius `max_step`.
#[derive(Clone, Copy, Debug)]
pub struct RandomStep {
    max_step: i32,
}

impl RandomStep {
    /// A walk with radius [`MAX_STEP`].
    pub fn new() -> Self {
        Self { max_step: MAX_STEP }
    }

    /// A walk with radius `max_step`; non-positive values are raised to 1.
    pub fn with_max_step(max_step: i32) -> Self {
        Self {
            max_step: max_step.max(1),
        }
    }

    /// The step radius.
    pub fn max_step(&self) -> i32 {
        self.max_step
    }

    /// Draw an offset by rejection sampling over the bounding square.
    ///
    /// The disc covers about 79% of the square, so the expected number of
    /// draws per step is below 1.3.
    fn sample_offset(&self, rng: &mut dyn RngCore) -> (i32, i32) {
        let r = self.max_step;
        let r2 = r * r;
        loop {
            let dx = rng.random_range(-r..=r);
            let dy = rng.random_range(-r..=r);
            if dx * dx + dy * dy <= r2 {
                return (dx, dy);
            }
        }
    }
}

impl Default for RandomStep {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetingStrategy for RandomStep {
    fn name(&self) -> &str {
        "random_step"
    }

    fn choose_next_target(
        &self,
        _mover: &Mover,
        current: Position,
        goals: &[Position],
        rng: &mut dyn RngCore,
    ) -> Position {
        if goals.is_empty() {
            return current;
        }
        let (dx, dy) = self.sample_offset(rng);
        current.offset(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outbreak_core::EntityKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn mover() -> Mover {
        Mover {
            kind: EntityKind::Human,
            speed: 5,
        }
    }

    #[test]
    fn no_goals_stays_put() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let p = Position::new(400, 300);
        assert_eq!(
            RandomStep::new().choose_next_target(&mover(), p, &[], &mut rng),
            p
        );
    }

    #[test]
    fn steps_stay_within_radius() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let strategy = RandomStep::new();
        let origin = Position::new(500, 300);
        let goals = [Position::new(0, 0)];
        for _ in 0..2_000 {
            let next = strategy.choose_next_target(&mover(), origin, &goals, &mut rng);
            assert!(origin.distance(next) <= f64::from(MAX_STEP));
        }
    }

    #[test]
    fn walk_covers_the_disc() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let strategy = RandomStep::with_max_step(2);
        let origin = Position::new(50, 50);
        let goals = [Position::new(0, 0)];
        let seen: HashSet<Position> = (0..2_000)
            .map(|_| strategy.choose_next_target(&mover(), origin, &goals, &mut rng))
            .collect();
        // Lattice points with dx² + dy² <= 4.
        assert_eq!(seen.len(), 13);
    }

    #[test]
    fn same_seed_same_walk() {
        let strategy = RandomStep::new();
        let goals = [Position::new(0, 0)];
        let walk = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut p = Position::new(500, 300);
            for _ in 0..50 {
                p = strategy.choose_next_target(&mover(), p, &goals, &mut rng);
            }
            p
        };
        assert_eq!(walk(9), walk(9));
    }
}

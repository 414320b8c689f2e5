//! Nearest-goal pursuit.
//!
//! Picks the closest goal (first one wins a tie) and steps straight at it,
//! snapping onto it when it is within one step.

use outbreak_core::{Mover, Position, TargetingStrategy, MAX_STEP};
use rand::RngCore;

/// Moves toward the nearest goal by at most [`MAX_STEP`] per tick.
///
/// Deterministic: never draws from the RNG.
#[derive(Clone, Copy, Debug)]
pub struct NearestGoal {
    max_step: i32,
}

impl NearestGoal {
    /// A strategy stepping at most [`MAX_STEP`] per tick.
    pub fn new() -> Self {
        Self { max_step: MAX_STEP }
    }

    /// A strategy stepping at most `max_step` per tick.
    ///
    /// Non-positive values are raised to 1.
    pub fn with_max_step(max_step: i32) -> Self {
        Self {
            max_step: max_step.max(1),
        }
    }

    /// The step cap.
    pub fn max_step(&self) -> i32 {
        self.max_step
    }
}

impl Default for NearestGoal {
    fn default() -> Self {
        Self::new()
    }
}

/// The goal closest to `current`; the earliest goal wins a tie.
pub fn nearest(current: Position, goals: &[Position]) -> Option<Position> {
    let (first, rest) = goals.split_first()?;
    let mut best = *first;
    let mut best_distance = current.distance(best);
    for goal in rest {
        let d = current.distance(*goal);
        if d < best_distance {
            best = *goal;
            best_distance = d;
        }
    }
    Some(best)
}

/// One step from `current` toward `target`.
///
/// Returns `target` when it is at most `max_step` away. Otherwise scales
/// the offset to length `max_step` and truncates each axis toward zero.
pub fn step_toward(current: Position, target: Position, max_step: i32) -> Position {
    let distance = current.distance(target);
    if distance <= f64::from(max_step) {
        return target;
    }
    let ratio = f64::from(max_step) / distance;
    let dx = f64::from(target.x - current.x) * ratio;
    let dy = f64::from(target.y - current.y) * ratio;
    current.offset(dx as i32, dy as i32)
}

impl TargetingStrategy for NearestGoal {
    fn name(&self) -> &str {
        "nearest_goal"
    }

    fn choose_next_target(
        &self,
        _mover: &Mover,
        current: Position,
        goals: &[Position],
        _rng: &mut dyn RngCore,
    ) -> Position {
        match nearest(current, goals) {
            Some(goal) => step_toward(current, goal, self.max_step),
            None => current,
        }
    }
}

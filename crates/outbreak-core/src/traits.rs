//! The [`TargetingStrategy`] seam and the [`Mover`] it is asked about.

use rand::RngCore;

use crate::entity::EntityKind;
use crate::geometry::Position;

/// Identity of the entity asking a strategy where to go next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mover {
    /// Variant of the moving entity.
    pub kind: EntityKind,
    /// Creation-time speed. Informational; the built-in strategies
    /// always move at most [`MAX_STEP`](crate::geometry::MAX_STEP).
    pub speed: u32,
}

/// Decides the next position of a mobile entity.
///
/// # Contract
///
/// - An empty `goals` slice MUST return `current` unchanged.
/// - The only permitted side effect is drawing from `rng`.
/// - The result is not required to be in bounds; the entity clamps it.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores the active strategy as
/// `Box<dyn TargetingStrategy>`.
///
/// # Examples
///
/// A strategy that teleports straight onto the first goal:
///
/// ```
/// use outbreak_core::{Mover, Position, TargetingStrategy};
/// use rand::RngCore;
///
/// struct Teleport;
///
/// impl TargetingStrategy for Teleport {
///     fn name(&self) -> &str { "teleport" }
///
///     fn choose_next_target(
///         &self,
///         _mover: &Mover,
///         current: Position,
///         goals: &[Position],
///         _rng: &mut dyn RngCore,
///     ) -> Position {
///         goals.first().copied().unwrap_or(current)
///     }
/// }
///
/// assert_eq!(Teleport.name(), "teleport");
/// ```
pub trait TargetingStrategy: Send + 'static {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Pick the position `mover` should occupy after this tick.
    fn choose_next_target(
        &self,
        mover: &Mover,
        current: Position,
        goals: &[Position],
        rng: &mut dyn RngCore,
    ) -> Position;
}

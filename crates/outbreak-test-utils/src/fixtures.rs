//! Reusable targeting strategy fixtures.
//!
//! - [`StayPut`]: never moves anything.
//! - [`TowardFirstGoal`]: snaps straight onto the first goal offered.
//! - [`RecordingStrategy`]: wraps another strategy and logs every goal set
//!   it is offered, so tests can check which priority a mover picked.

use std::sync::{Arc, Mutex};

use outbreak_core::{EntityKind, Mover, Position, TargetingStrategy};
use rand::RngCore;

/// Returns the current position unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct StayPut;

impl TargetingStrategy for StayPut {
    fn name(&self) -> &str {
        "stay_put"
    }

    fn choose_next_target(
        &self,
        _mover: &Mover,
        current: Position,
        _goals: &[Position],
        _rng: &mut dyn RngCore,
    ) -> Position {
        current
    }
}

/// Jumps onto the first goal, ignoring distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct TowardFirstGoal;

impl TargetingStrategy for TowardFirstGoal {
    fn name(&self) -> &str {
        "toward_first_goal"
    }

    fn choose_next_target(
        &self,
        _mover: &Mover,
        current: Position,
        goals: &[Position],
        _rng: &mut dyn RngCore,
    ) -> Position {
        goals.first().copied().unwrap_or(current)
    }
}

/// One call seen by a [`RecordingStrategy`].
#[derive(Clone, Debug, PartialEq)]
pub struct Offer {
    pub mover: EntityKind,
    pub goals: Vec<Position>,
}

/// Delegates to an inner strategy and records every call.
///
/// Clones share the same log, so keep one clone for assertions and hand
/// the other to the engine.
#[derive(Clone)]
pub struct RecordingStrategy<S> {
    inner: S,
    log: Arc<Mutex<Vec<Offer>>>,
}

impl<S: TargetingStrategy> RecordingStrategy<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every offer so far, oldest first.
    pub fn offers(&self) -> Vec<Offer> {
        self.log.lock().unwrap().clone()
    }

    /// Offers made to movers of `kind`.
    pub fn offers_to(&self, kind: EntityKind) -> Vec<Offer> {
        self.offers()
            .into_iter()
            .filter(|o| o.mover == kind)
            .collect()
    }

    pub fn clear(&self) {
        self.log.lock().unwrap().clear();
    }
}

impl<S: TargetingStrategy> TargetingStrategy for RecordingStrategy<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn choose_next_target(
        &self,
        mover: &Mover,
        current: Position,
        goals: &[Position],
        rng: &mut dyn RngCore,
    ) -> Position {
        self.log.lock().unwrap().push(Offer {
            mover: mover.kind,
            goals: goals.to_vec(),
        });
        self.inner.choose_next_target(mover, current, goals, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoRng;

    impl RngCore for NoRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn mover(kind: EntityKind) -> Mover {
        Mover { kind, speed: 1 }
    }

    #[test]
    fn stay_put_never_moves() {
        let p = Position::new(4, 4);
        let next = StayPut.choose_next_target(
            &mover(EntityKind::Human),
            p,
            &[Position::new(0, 0)],
            &mut NoRng,
        );
        assert_eq!(next, p);
    }

    #[test]
    fn toward_first_goal_snaps() {
        let goals = [Position::new(9, 9), Position::new(1, 1)];
        let next = TowardFirstGoal.choose_next_target(
            &mover(EntityKind::Zombie),
            Position::new(0, 0),
            &goals,
            &mut NoRng,
        );
        assert_eq!(next, Position::new(9, 9));
    }

    #[test]
    fn recording_shares_log_between_clones() {
        let rec = RecordingStrategy::new(StayPut);
        let handed_out = rec.clone();
        handed_out.choose_next_target(
            &mover(EntityKind::Human),
            Position::new(0, 0),
            &[Position::new(5, 5)],
            &mut NoRng,
        );
        assert_eq!(rec.offers_to(EntityKind::Human).len(), 1);
        assert!(rec.offers_to(EntityKind::Zombie).is_empty());
        assert_eq!(rec.offers()[0].goals, vec![Position::new(5, 5)]);
        rec.clear();
        assert!(rec.offers().is_empty());
    }
}

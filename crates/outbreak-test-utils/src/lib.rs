//! Test utilities for Outbreak development.
//!
//! Provides entity builders with fixed, predictable lifespans and speeds,
//! a [`TickCounter`] for observer assertions, and the strategies in
//! [`fixtures`] for driving movement deterministically.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{RecordingStrategy, StayPut, TowardFirstGoal};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use outbreak_core::{Entity, Position};

/// Lifespan given by the builders below. Long enough that nothing expires
/// during a short test.
pub const TEST_LIFESPAN: i32 = 80;

/// Human speed used by [`human_at`].
pub const TEST_HUMAN_SPEED: u32 = 5;

/// Zombie speed used by [`zombie_at`].
pub const TEST_ZOMBIE_SPEED: u32 = 3;

pub fn human_at(x: i32, y: i32) -> Entity {
    Entity::human(Position::new(x, y), TEST_LIFESPAN, TEST_HUMAN_SPEED)
}

/// A human holding an axe for `window` more ticks.
pub fn armed_human_at(x: i32, y: i32, window: u32) -> Entity {
    human_at(x, y).with_attack_window(window)
}

pub fn zombie_at(x: i32, y: i32) -> Entity {
    Entity::zombie(Position::new(x, y), TEST_LIFESPAN, TEST_ZOMBIE_SPEED)
}

pub fn food_at(x: i32, y: i32) -> Entity {
    Entity::food(Position::new(x, y), TEST_LIFESPAN)
}

pub fn axe_at(x: i32, y: i32) -> Entity {
    Entity::axe(Position::new(x, y), TEST_LIFESPAN)
}

pub fn shelter_at(x: i32, y: i32) -> Entity {
    Entity::shelter(Position::new(x, y), TEST_LIFESPAN)
}

/// Counts tick notifications across threads.
///
/// [`observer()`](TickCounter::observer) hands out closures that bump the
/// shared count; closures are tick observers in the engine.
#[derive(Clone, Debug, Default)]
pub struct TickCounter {
    count: Arc<AtomicUsize>,
}

impl TickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A closure incrementing this counter once per call.
    pub fn observer(&self) -> impl FnMut() + Send + 'static {
        let count = Arc::clone(&self.count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Notifications seen so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

//! Targeting strategies for the Outbreak simulation.
//!
//! Implementations of [`TargetingStrategy`](outbreak_core::TargetingStrategy)
//! and the [`StrategyKind`] selector the engine builds them from:
//!
//! - [`NearestGoal`]: step straight at the closest goal, snapping on arrival.
//! - [`RandomStep`]: random walk inside the max-step disc while any goal exists.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod kind;
pub mod nearest;
pub mod random_step;

pub use error::UnknownStrategy;
pub use kind::StrategyKind;
pub use nearest::NearestGoal;
pub use random_step::RandomStep;

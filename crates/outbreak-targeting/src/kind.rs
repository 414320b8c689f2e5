//! [`StrategyKind`]: naming and building strategies.

use std::fmt;
use std::str::FromStr;

use outbreak_core::TargetingStrategy;

use crate::error::UnknownStrategy;
use crate::nearest::NearestGoal;
use crate::random_step::RandomStep;

/// The built-in targeting strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// [`NearestGoal`].
    NearestGoal,
    /// [`RandomStep`]. The default.
    #[default]
    RandomStep,
}

impl StrategyKind {
    /// Resolve `name`, falling back to the default for anything unrecognised.
    ///
    /// This is the lenient lookup used by reconfiguration: an unknown name
    /// is not an error, it simply selects [`StrategyKind::default()`].
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Canonical name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::NearestGoal => "nearest",
            Self::RandomStep => "random",
        }
    }

    /// Build a fresh strategy of this kind.
    pub fn build(self) -> Box<dyn TargetingStrategy> {
        match self {
            Self::NearestGoal => Box::new(NearestGoal::new()),
            Self::RandomStep => Box::new(RandomStep::new()),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    /// Case-insensitive; also accepts the legacy class-style names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "nearest-goal" | "nearest_goal" | "proximity"
            | "proximitydecisionalgorithm" => Ok(Self::NearestGoal),
            "random" | "random-step" | "random_step" | "randomdecisionalgorithm" => {
                Ok(Self::RandomStep)
            }
            _ => Err(UnknownStrategy { name: s.to_owned() }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

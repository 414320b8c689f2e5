//! Error types for strategy selection.

use std::error::Error;
use std::fmt;

/// A strategy name that matches no known strategy.
///
/// Only returned by the strict [`FromStr`](std::str::FromStr) parse.
/// [`StrategyKind::from_name_or_default`](crate::StrategyKind::from_name_or_default)
/// never fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownStrategy {
    /// The name as given.
    pub name: String,
}

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown targeting strategy '{}'", self.name)
    }
}

impl Error for UnknownStrategy {}

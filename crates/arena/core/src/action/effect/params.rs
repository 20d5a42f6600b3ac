//! Parameters shared by several effects.

use std::fmt;

use crate::decision::DecisionSource;

/// Who an effect applies to, relative to the acting combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetSelector {
    /// The acting combatant.
    User,
    /// The target chosen for the action.
    Opponent,
}

/// Magnitude of a damage or healing effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Amount {
    /// Base value fed into the full formula.
    Base(u32),
    /// Percent of the target's max HP, rounded up.
    Relative(u32),
    /// Fixed number of health points.
    Absolute(u32),
}

impl Amount {
    pub const fn value(self) -> u32 {
        match self {
            Self::Base(value) | Self::Relative(value) | Self::Absolute(value) => value,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(value) => write!(f, "b{value}"),
            Self::Relative(value) => write!(f, "r{value}"),
            Self::Absolute(value) => write!(f, "a{value}"),
        }
    }
}

/// A fixed or ranged count (repeat counts, protection durations).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Count {
    Fixed(u32),
    /// Drawn once from `[min, max]` inclusive.
    Random { min: u32, max: u32 },
}

impl Count {
    /// Settle the count, drawing from `decisions` only when ranged.
    pub fn resolve(self, decisions: &mut dyn DecisionSource) -> u32 {
        match self {
            Self::Fixed(count) => count,
            Self::Random { min, max } => decisions.count(min, max),
        }
    }

    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

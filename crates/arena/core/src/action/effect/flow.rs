//! Control-flow effects.

use super::kinds::Effect;
use super::params::Count;

/// Does nothing when it hits. Useful as a gate at the front of an action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinueEffect {
    pub hit_rate: u8,
}

impl ContinueEffect {
    pub fn new(hit_rate: u8) -> Self {
        Self { hit_rate }
    }
}

/// Repeat a sub-sequence of effects.
///
/// Repeats are replaced by `count` copies of `effects` while the queue is
/// built; they never execute themselves. Nesting is allowed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepeatEffect {
    pub count: Count,
    pub effects: Vec<Effect>,
}

impl RepeatEffect {
    pub fn new(count: Count, effects: Vec<Effect>) -> Self {
        Self { count, effects }
    }
}

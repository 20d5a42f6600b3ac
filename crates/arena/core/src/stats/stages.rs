//! Stat stage table.

use super::stat::Stat;
use crate::config::ArenaConfig;

/// Accumulated stage modifiers, one per stat.
///
/// Changes are additive and the stored value is always clamped to
/// [`ArenaConfig::MIN_STAGE`, `ArenaConfig::MAX_STAGE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatStages {
    stages: [i32; Stat::COUNT],
}

impl StatStages {
    /// Creates a neutral table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: Stat) -> i32 {
        self.stages[stat.index()]
    }

    /// Adds `delta` to the stage of `stat` and returns the stored result.
    ///
    /// `delta` itself is not bounded; only the result is clamped.
    pub fn change(&mut self, stat: Stat, delta: i32) -> i32 {
        let slot = &mut self.stages[stat.index()];
        *slot = slot
            .saturating_add(delta)
            .clamp(ArenaConfig::MIN_STAGE, ArenaConfig::MAX_STAGE);
        *slot
    }
}

//! Status conditions.
//!
//! A combatant carries at most one condition at a time. Conditions weaken a
//! single stat (applied as the final multiplier of the effective stat) or keep
//! the combatant from acting.

use super::stat::Stat;
use crate::config::ArenaConfig;

/// Persistent affliction of a combatant.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum StatusCondition {
    #[default]
    None,
    /// DEF × 0.75
    Wet,
    /// ATK × 0.75, loses HP at the end of each turn.
    Burn,
    /// SPD × 0.75
    Quicksand,
    /// Cannot act until woken up.
    Sleep,
    /// Terminal marker set when a combatant is defeated.
    Fainted,
}

impl StatusCondition {
    /// Returns true for the neutral condition.
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Multiplier this condition applies to `stat`.
    pub fn multiplier(self, stat: Stat) -> f64 {
        match (self, stat) {
            (Self::Wet, Stat::Def) | (Self::Burn, Stat::Atk) | (Self::Quicksand, Stat::Spd) => {
                ArenaConfig::CONDITION_STAT_MULTIPLIER
            }
            _ => 1.0,
        }
    }

    /// Returns true if this condition keeps the combatant from acting.
    pub const fn prevents_action(self) -> bool {
        matches!(self, Self::Sleep | Self::Fainted)
    }

    /// Returns true if this condition is rolled for recovery after the
    /// combatant's own turn (everything except NONE, SLEEP and FAINTED).
    pub const fn wears_off_after_turn(self) -> bool {
        matches!(self, Self::Wet | Self::Burn | Self::Quicksand)
    }

    /// Suffix appended to the display name when the condition is inflicted.
    pub const fn inflicted_message(self) -> Option<&'static str> {
        match self {
            Self::Wet => Some(" becomes soaking wet!"),
            Self::Burn => Some(" caught on fire!"),
            Self::Quicksand => Some(" gets caught by quicksand!"),
            Self::Sleep => Some(" falls asleep!"),
            Self::None | Self::Fainted => None,
        }
    }

    /// Suffix appended to the display name while the condition is active.
    pub const fn active_message(self) -> Option<&'static str> {
        match self {
            Self::Wet => Some(" is soaking wet!"),
            Self::Burn => Some(" is burning!"),
            Self::Quicksand => Some(" is caught in quicksand!"),
            Self::Sleep => Some(" is asleep!"),
            Self::None | Self::Fainted => None,
        }
    }

    /// Suffix appended to the display name when the condition ends.
    pub const fn end_message(self) -> Option<&'static str> {
        match self {
            Self::Wet => Some(" dried up!"),
            Self::Burn => Some("'s burning has faded!"),
            Self::Quicksand => Some(" escaped the quicksand!"),
            Self::Sleep => Some(" woke up!"),
            Self::None | Self::Fainted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn each_condition_weakens_one_stat() {
        assert_eq!(StatusCondition::Wet.multiplier(Stat::Def), 0.75);
        assert_eq!(StatusCondition::Burn.multiplier(Stat::Atk), 0.75);
        assert_eq!(StatusCondition::Quicksand.multiplier(Stat::Spd), 0.75);

        for condition in StatusCondition::iter() {
            let weakened = Stat::STAGED
                .iter()
                .filter(|&&stat| condition.multiplier(stat) < 1.0)
                .count();
            let expected = usize::from(matches!(
                condition,
                StatusCondition::Wet | StatusCondition::Burn | StatusCondition::Quicksand
            ));
            assert_eq!(weakened, expected, "{condition}");
        }
    }

    #[test]
    fn sleep_and_fainted_prevent_actions() {
        assert!(StatusCondition::Sleep.prevents_action());
        assert!(StatusCondition::Fainted.prevents_action());
        assert!(!StatusCondition::Burn.prevents_action());
        assert!(!StatusCondition::None.prevents_action());
    }

    #[test]
    fn inflictable_conditions_have_messages() {
        for condition in [
            StatusCondition::Wet,
            StatusCondition::Burn,
            StatusCondition::Quicksand,
            StatusCondition::Sleep,
        ] {
            assert!(condition.inflicted_message().is_some());
            assert!(condition.active_message().is_some());
            assert!(condition.end_message().is_some());
        }
        assert!(StatusCondition::None.active_message().is_none());
    }
}

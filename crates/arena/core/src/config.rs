/// Arena configuration constants and tunable parameters.
///
/// The associated constants are fixed rules of the formulas. The fields are
/// the chances and percentages a contest may tune; their defaults reproduce
/// the standard ruleset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Percent chance that a sleeping combatant wakes up instead of acting.
    pub wake_chance: f64,
    /// Percent chance that a non-sleep status condition ends after a turn.
    pub status_recovery_chance: f64,
    /// Percent of max HP lost to burning at the end of a turn.
    pub burn_damage_percent: u32,
}

impl ArenaConfig {
    // ===== stat stages =====
    pub const MIN_STAGE: i32 = -5;
    pub const MAX_STAGE: i32 = 5;
    /// Effective stats never drop below this value.
    pub const MIN_EFFECTIVE_STAT: f64 = 1.0;
    pub const DEFAULT_PRECISION: u32 = 1;
    pub const DEFAULT_AGILITY: u32 = 1;

    // ===== status conditions =====
    /// Multiplier applied to the stat a condition weakens (WET/BURN/QUICKSAND).
    pub const CONDITION_STAT_MULTIPLIER: f64 = 0.75;

    // ===== damage formula =====
    pub const SUPER_EFFECTIVE_MULTIPLIER: f64 = 2.0;
    pub const NOT_EFFECTIVE_MULTIPLIER: f64 = 0.5;
    /// Critical chance in percent at equal speed.
    pub const CRITICAL_BASE_CHANCE: f64 = 10.0;
    pub const CRITICAL_MULTIPLIER: f64 = 2.0;
    pub const SAME_ELEMENT_MULTIPLIER: f64 = 1.5;
    pub const RANDOM_FACTOR_MIN: f64 = 0.85;
    pub const RANDOM_FACTOR_MAX: f64 = 1.0;
    /// Fixed divisor of base damage and base healing.
    pub const NORMALIZATION_DIVISOR: u32 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WAKE_CHANCE: f64 = 33.33;
    pub const DEFAULT_STATUS_RECOVERY_CHANCE: f64 = 33.33;
    pub const DEFAULT_BURN_DAMAGE_PERCENT: u32 = 10;

    pub fn new() -> Self {
        Self {
            wake_chance: Self::DEFAULT_WAKE_CHANCE,
            status_recovery_chance: Self::DEFAULT_STATUS_RECOVERY_CHANCE,
            burn_damage_percent: Self::DEFAULT_BURN_DAMAGE_PERCENT,
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

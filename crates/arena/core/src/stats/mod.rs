//! Stat system.
//!
//! ```text
//! [ BaseStats ]        fixed per combatant (HP, ATK, DEF, SPD, PRC, AGL)
//!      ↓
//! [ StatStages ]       accumulated buffs/debuffs in [-5, +5]
//!      ↓
//! [ StatusCondition ]  final multiplier (WET, BURN, QUICKSAND)
//!      ↓
//! effective = max(1.0, base × stage factor × condition multiplier)
//! ```

pub mod stages;
pub mod stat;
pub mod status;

pub use stages::StatStages;
pub use stat::{BaseStats, Stat};
pub use status::StatusCondition;

use crate::config::ArenaConfig;

/// Compute an effective stat from its three layers.
///
/// HP has no staging; its stage factor is always 1.0.
pub fn effective_stat(
    base: &BaseStats,
    stages: &StatStages,
    condition: StatusCondition,
    stat: Stat,
) -> f64 {
    let value = f64::from(base.get(stat))
        * stat.stage_factor(stages.get(stat))
        * condition.multiplier(stat);
    value.max(ArenaConfig::MIN_EFFECTIVE_STAT)
}

//! Stat channels and base stat blocks.

use crate::config::ArenaConfig;

/// The six stat channels of a combatant.
///
/// - **HP**: maximum health, never staged
/// - **ATK** / **DEF**: numerator and denominator of the damage stat factor
/// - **SPD**: turn order and critical chance
/// - **PRC** / **AGL**: precision against agility scales hit chance
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spd,
    Prc,
    Agl,
}

impl Stat {
    /// Number of stat channels.
    pub const COUNT: usize = 6;

    /// Stats that take part in stage changes, in display order.
    pub const STAGED: [Stat; 5] = [Stat::Atk, Stat::Def, Stat::Spd, Stat::Prc, Stat::Agl];

    /// Position of this stat in per-stat tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Base factor of the stage formula.
    pub const fn base_factor(self) -> i32 {
        match self {
            Stat::Hp => 0,
            Stat::Atk | Stat::Def | Stat::Spd => 2,
            Stat::Prc | Stat::Agl => 3,
        }
    }

    /// Multiplier for a stage value.
    ///
    /// Formula:
    /// - stage ≥ 0: `(base + stage) / base`
    /// - stage < 0: `base / (base - stage)`
    ///
    /// The stage is clamped to [-5, +5] first. HP has no base factor and
    /// always yields 1.0.
    pub fn stage_factor(self, stage: i32) -> f64 {
        let base = self.base_factor();
        if base == 0 {
            return 1.0;
        }
        let stage = stage.clamp(ArenaConfig::MIN_STAGE, ArenaConfig::MAX_STAGE);
        if stage >= 0 {
            f64::from(base + stage) / f64::from(base)
        } else {
            f64::from(base) / f64::from(base - stage)
        }
    }
}

/// Immutable base values of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spd: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_precision"))]
    pub prc: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_agility"))]
    pub agl: u32,
}

#[cfg(feature = "serde")]
fn default_precision() -> u32 {
    ArenaConfig::DEFAULT_PRECISION
}

#[cfg(feature = "serde")]
fn default_agility() -> u32 {
    ArenaConfig::DEFAULT_AGILITY
}

impl BaseStats {
    /// Create a stat block; precision and agility use their fixed defaults.
    pub fn new(hp: u32, atk: u32, def: u32, spd: u32) -> Self {
        Self {
            hp,
            atk,
            def,
            spd,
            prc: ArenaConfig::DEFAULT_PRECISION,
            agl: ArenaConfig::DEFAULT_AGILITY,
        }
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spd => self.spd,
            Stat::Prc => self.prc,
            Stat::Agl => self.agl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn stage_factor_matches_formula() {
        assert_eq!(Stat::Atk.stage_factor(0), 1.0);
        assert_eq!(Stat::Atk.stage_factor(2), 2.0);
        assert_eq!(Stat::Atk.stage_factor(-2), 0.5);
        assert_eq!(Stat::Prc.stage_factor(3), 2.0);
        assert_eq!(Stat::Agl.stage_factor(-3), 0.5);
        assert!((Stat::Spd.stage_factor(5) - 3.5).abs() < 1e-9);
        assert!((Stat::Def.stage_factor(-5) - 2.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn hp_is_never_staged() {
        assert_eq!(Stat::Hp.stage_factor(4), 1.0);
        assert_eq!(Stat::Hp.stage_factor(-4), 1.0);
    }

    #[test]
    fn parses_uppercase_names() {
        assert_eq!(Stat::from_str("ATK").unwrap(), Stat::Atk);
        assert_eq!(Stat::from_str("AGL").unwrap(), Stat::Agl);
        assert!(Stat::from_str("atk").is_err());
        assert_eq!(Stat::Spd.to_string(), "SPD");
    }

    #[test]
    fn base_stats_default_precision_and_agility() {
        let base = BaseStats::new(50, 10, 8, 6);
        assert_eq!(base.get(Stat::Prc), 1);
        assert_eq!(base.get(Stat::Agl), 1);
        assert_eq!(base.get(Stat::Hp), 50);
    }
}

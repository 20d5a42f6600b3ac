//! Effect enum and dispatcher.

use crate::action::execute::EffectContext;
use crate::combatant::CombatantId;
use crate::error::ArenaError;

use super::damage::DamageEffect;
use super::flow::{ContinueEffect, RepeatEffect};
use super::heal::HealEffect;
use super::params::TargetSelector;
use super::protect::ProtectEffect;
use super::stat_change::StatChangeEffect;
use super::status::InflictStatusEffect;

/// Whether an applied effect counted as a hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    Hit,
    Miss,
}

impl EffectOutcome {
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

/// One step of an action.
///
/// Each variant delegates to its corresponding struct implementation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    Damage(DamageEffect),
    Heal(HealEffect),
    StatChange(StatChangeEffect),
    InflictStatus(InflictStatusEffect),
    Protect(ProtectEffect),
    Continue(ContinueEffect),
    /// Expanded away while the effect queue is built; never applied.
    Repeat(RepeatEffect),
}

impl Effect {
    /// Base hit chance in percent.
    pub fn hit_rate(&self) -> u8 {
        match self {
            Self::Damage(e) => e.hit_rate,
            Self::Heal(e) => e.hit_rate,
            Self::StatChange(e) => e.hit_rate,
            Self::InflictStatus(e) => e.hit_rate,
            Self::Protect(e) => e.hit_rate,
            Self::Continue(e) => e.hit_rate,
            Self::Repeat(_) => 100,
        }
    }

    /// Target selector. Protect, Continue and Repeat always resolve to the
    /// acting combatant.
    pub fn target(&self) -> TargetSelector {
        match self {
            Self::Damage(e) => e.target,
            Self::Heal(e) => e.target,
            Self::StatChange(e) => e.target,
            Self::InflictStatus(e) => e.target,
            Self::Protect(_) | Self::Continue(_) | Self::Repeat(_) => TargetSelector::User,
        }
    }

    /// Apply the effect to an already resolved target after a successful hit
    /// roll.
    ///
    /// # Errors
    ///
    /// [`ArenaError::UnexpandedRepeat`] for a repeat block, which must have
    /// been expanded while building the queue.
    pub fn apply(
        &self,
        target: CombatantId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<EffectOutcome, ArenaError> {
        match self {
            Self::Damage(e) => e.apply(target, ctx),
            Self::Heal(e) => e.apply(target, ctx),
            Self::StatChange(e) => e.apply(target, ctx),
            Self::InflictStatus(e) => e.apply(target, ctx),
            Self::Protect(e) => e.apply(target, ctx),
            Self::Continue(_) => Ok(EffectOutcome::Hit),
            Self::Repeat(_) => Err(ArenaError::UnexpandedRepeat),
        }
    }
}

macro_rules! impl_from_effect {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Effect {
                fn from(effect: $ty) -> Self {
                    Self::$variant(effect)
                }
            }
        )*
    };
}

impl_from_effect!(
    Damage(DamageEffect),
    Heal(HealEffect),
    StatChange(StatChangeEffect),
    InflictStatus(InflictStatusEffect),
    Protect(ProtectEffect),
    Continue(ContinueEffect),
    Repeat(RepeatEffect),
);

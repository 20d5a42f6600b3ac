use crate::action::execute::EffectContext;
use crate::combatant::CombatantId;
use crate::error::ArenaError;
use crate::event::BattleEvent;
use crate::stats::StatusCondition;

use super::kinds::EffectOutcome;
use super::params::TargetSelector;

/// Inflict a status condition on the target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InflictStatusEffect {
    pub target: TargetSelector,
    pub condition: StatusCondition,
    pub hit_rate: u8,
}

impl InflictStatusEffect {
    pub fn new(target: TargetSelector, condition: StatusCondition, hit_rate: u8) -> Self {
        Self {
            target,
            condition,
            hit_rate,
        }
    }

    /// A target that already carries a condition keeps it; the effect still
    /// counts as a hit.
    pub fn apply(
        &self,
        target: CombatantId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<EffectOutcome, ArenaError> {
        let state = ctx.combatant_mut(target)?.state_mut();
        if state.is_defeated() {
            return Ok(EffectOutcome::Miss);
        }
        if !state.status().is_none() {
            return Ok(EffectOutcome::Hit);
        }

        state.set_status(self.condition);
        ctx.emit(BattleEvent::StatusInflicted {
            target,
            condition: self.condition,
        });
        Ok(EffectOutcome::Hit)
    }
}

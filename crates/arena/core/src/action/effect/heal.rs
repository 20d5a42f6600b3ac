use crate::action::execute::EffectContext;
use crate::combat;
use crate::combatant::CombatantId;
use crate::error::ArenaError;
use crate::event::BattleEvent;

use super::kinds::EffectOutcome;
use super::params::{Amount, TargetSelector};

/// Restore health to the target.
///
/// BASE healing is a plain third of the value, with none of the damage
/// modifiers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealEffect {
    pub target: TargetSelector,
    pub amount: Amount,
    pub hit_rate: u8,
}

impl HealEffect {
    pub fn new(target: TargetSelector, amount: Amount, hit_rate: u8) -> Self {
        Self {
            target,
            amount,
            hit_rate,
        }
    }

    pub fn apply(
        &self,
        target: CombatantId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<EffectOutcome, ArenaError> {
        let state = ctx.combatant_mut(target)?.state_mut();
        if state.is_defeated() {
            return Ok(EffectOutcome::Miss);
        }

        let amount = match self.amount {
            Amount::Absolute(value) => value,
            Amount::Relative(percent) => combat::relative_amount(state.max_hp(), percent),
            Amount::Base(value) => combat::base_healing(value),
        };
        let gained = state.heal(amount);

        ctx.emit(BattleEvent::Healed {
            target,
            amount: gained,
        });
        Ok(EffectOutcome::Hit)
    }
}

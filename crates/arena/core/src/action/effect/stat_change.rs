use crate::action::execute::EffectContext;
use crate::combatant::CombatantId;
use crate::error::ArenaError;
use crate::event::BattleEvent;
use crate::stats::Stat;

use super::kinds::EffectOutcome;
use super::params::TargetSelector;

/// Raise or lower a stat stage of the target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatChangeEffect {
    pub target: TargetSelector,
    pub stat: Stat,
    pub stages: i32,
    pub hit_rate: u8,
}

impl StatChangeEffect {
    pub fn new(target: TargetSelector, stat: Stat, stages: i32, hit_rate: u8) -> Self {
        Self {
            target,
            stat,
            stages,
            hit_rate,
        }
    }

    /// Stat protection only absorbs decreases coming from an opponent; the
    /// blocked change still counts as a hit.
    pub fn apply(
        &self,
        target: CombatantId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<EffectOutcome, ArenaError> {
        let from_opponent = target != ctx.actor;
        let state = ctx.combatant_mut(target)?.state_mut();
        if state.is_defeated() {
            return Ok(EffectOutcome::Miss);
        }

        if self.stages < 0 && from_opponent && state.protection().guards_stats() {
            ctx.emit(BattleEvent::StatChangeBlocked { target });
            return Ok(EffectOutcome::Hit);
        }

        state.change_stat_stage(self.stat, self.stages);
        let event = if self.stages > 0 {
            BattleEvent::StatRaised {
                target,
                stat: self.stat,
            }
        } else {
            BattleEvent::StatLowered {
                target,
                stat: self.stat,
            }
        };
        ctx.emit(event);
        Ok(EffectOutcome::Hit)
    }
}

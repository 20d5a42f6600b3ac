use crate::action::execute::EffectContext;
use crate::combatant::{CombatantId, Guard};
use crate::error::ArenaError;
use crate::event::BattleEvent;

use super::kinds::EffectOutcome;
use super::params::Count;

/// Protect the acting combatant for a number of rounds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtectEffect {
    pub guard: Guard,
    pub duration: Count,
    pub hit_rate: u8,
}

impl ProtectEffect {
    pub fn new(guard: Guard, duration: Count, hit_rate: u8) -> Self {
        Self {
            guard,
            duration,
            hit_rate,
        }
    }

    /// Replaces any protection the actor already had.
    ///
    /// Queued protect effects carry a fixed duration; a ranged one applied
    /// directly draws its duration here.
    pub fn apply(
        &self,
        target: CombatantId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<EffectOutcome, ArenaError> {
        if ctx.combatant(target)?.is_defeated() {
            return Ok(EffectOutcome::Miss);
        }

        let duration = self.duration.resolve(ctx.decisions);
        ctx.combatant_mut(target)?.state_mut().set_protection(
            self.guard.contains(Guard::HEALTH),
            self.guard.contains(Guard::STATS),
            duration,
        );
        ctx.emit(BattleEvent::Protected {
            target,
            guard: self.guard,
        });
        Ok(EffectOutcome::Hit)
    }
}

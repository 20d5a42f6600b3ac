//! Damage effect implementation.

use crate::action::execute::EffectContext;
use crate::combat::{self, BaseDamage, Effectiveness};
use crate::combatant::CombatantId;
use crate::config::ArenaConfig;
use crate::decision::Decision;
use crate::error::ArenaError;
use crate::event::BattleEvent;
use crate::stats::Stat;

use super::kinds::EffectOutcome;
use super::params::{Amount, TargetSelector};

/// Deal damage to the target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageEffect {
    pub target: TargetSelector,
    pub amount: Amount,
    pub hit_rate: u8,
}

impl DamageEffect {
    pub fn new(target: TargetSelector, amount: Amount, hit_rate: u8) -> Self {
        Self {
            target,
            amount,
            hit_rate,
        }
    }

    /// Apply damage to `target`.
    ///
    /// Damage an actor deals to itself bypasses its own health protection.
    pub fn apply(
        &self,
        target: CombatantId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<EffectOutcome, ArenaError> {
        let defender = ctx.combatant(target)?;
        if defender.is_defeated() {
            return Ok(EffectOutcome::Miss);
        }
        let max_hp = defender.state().max_hp();

        let amount = match self.amount {
            Amount::Absolute(value) => value,
            Amount::Relative(percent) => combat::relative_amount(max_hp, percent),
            Amount::Base(base) => base_damage(base, target, ctx)?,
        };

        let self_inflicted = target == ctx.actor;
        let state = ctx.combatant_mut(target)?.state_mut();
        let event = if self_inflicted {
            BattleEvent::Damaged {
                target,
                amount: state.lose_health(amount),
            }
        } else if state.protection().guards_health() {
            BattleEvent::DamageBlocked { target }
        } else {
            BattleEvent::Damaged {
                target,
                amount: state.take_damage(amount),
            }
        };
        ctx.emit(event);
        ctx.faint_if_defeated(target)?;

        Ok(EffectOutcome::Hit)
    }
}

/// Run the full damage formula, drawing the critical roll and then the random
/// factor.
fn base_damage(
    base: u32,
    target: CombatantId,
    ctx: &mut EffectContext<'_>,
) -> Result<u32, ArenaError> {
    let (effectiveness, attack, defense, crit_chance, same_element) = {
        let attacker = ctx.combatant(ctx.actor)?;
        let defender = ctx.combatant(target)?;
        (
            ctx.element.effectiveness_against(defender.element()),
            attacker.effective_stat(Stat::Atk),
            defender.effective_stat(Stat::Def),
            combat::critical_chance(
                attacker.effective_stat(Stat::Spd),
                defender.effective_stat(Stat::Spd),
            ),
            ctx.element == attacker.element(),
        )
    };

    if effectiveness != Effectiveness::Neutral {
        ctx.emit(BattleEvent::Effectiveness { effectiveness });
    }

    let critical = ctx.decisions.check(Decision::CriticalHit, crit_chance);
    if critical {
        ctx.emit(BattleEvent::CriticalHit);
    }

    let random_factor = ctx
        .decisions
        .factor(ArenaConfig::RANDOM_FACTOR_MIN, ArenaConfig::RANDOM_FACTOR_MAX);

    let damage = BaseDamage {
        base,
        effectiveness,
        attack,
        defense,
        critical,
        same_element,
        random_factor,
    }
    .calculate();

    tracing::trace!(base, attack, defense, critical, random_factor, damage, "base damage");
    Ok(damage)
}

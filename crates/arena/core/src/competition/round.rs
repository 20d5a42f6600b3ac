//! Round execution: turn order, turns, end-of-turn status and end of round.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::action::{Action, EffectContext, execute_action};
use crate::combat;
use crate::combatant::CombatantId;
use crate::decision::{Decision, DecisionSource};
use crate::error::ArenaError;
use crate::event::BattleEvent;
use crate::stats::{Stat, StatusCondition};

use super::Competition;

/// A validated choice waiting for the execution phase.
#[derive(Clone, Debug)]
pub(super) enum PendingChoice {
    Pass,
    Use {
        action: Arc<Action>,
        target: Option<CombatantId>,
    },
}

/// How a round ended.
pub(super) enum RoundEnd {
    Continue,
    Decided(Option<CombatantId>),
}

impl<D: DecisionSource> Competition<D> {
    /// Conscious combatants by effective SPD, fastest first. Ties keep roster
    /// order.
    pub(super) fn turn_order(&self) -> Vec<CombatantId> {
        let mut order: Vec<(CombatantId, f64)> = self
            .roster
            .iter()
            .filter(|(_, combatant)| !combatant.is_defeated())
            .map(|(id, combatant)| (id, combatant.effective_stat(Stat::Spd)))
            .collect();
        order.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        order.into_iter().map(|(id, _)| id).collect()
    }

    /// Run the execution phase of the current round.
    pub(super) fn execute_round(&mut self) -> Result<RoundEnd, ArenaError> {
        let order = self.turn_order();
        tracing::debug!(round = self.round, ?order, "executing round");

        for actor in order {
            self.take_turn(actor)?;
            if let Some(winner) = self.result() {
                return Ok(RoundEnd::Decided(winner));
            }
        }

        self.end_round();
        Ok(RoundEnd::Continue)
    }

    fn take_turn(&mut self, actor: CombatantId) -> Result<(), ArenaError> {
        let combatant = self
            .roster
            .get(actor)
            .ok_or(ArenaError::UnknownCombatant(actor))?;
        if combatant.is_defeated() {
            return Ok(());
        }
        let status = combatant.state().status();

        self.events.push(BattleEvent::TurnStarted { actor });
        let choice = self
            .choices
            .get_mut(actor.index())
            .and_then(Option::take)
            .unwrap_or(PendingChoice::Pass);

        let PendingChoice::Use { action, target } = choice else {
            tracing::debug!("{actor} passes");
            self.events.push(BattleEvent::Passed { actor });
            return Ok(());
        };

        if status.prevents_action() {
            self.sleep_turn(actor)?;
            return Ok(());
        }

        self.events.push(BattleEvent::ActionUsed {
            actor,
            action: action.name().to_owned(),
        });
        let Self {
            roster,
            decisions,
            events,
            config,
            ..
        } = self;
        let mut ctx = EffectContext::new(
            actor,
            target,
            action.element(),
            roster,
            decisions,
            events,
            config,
        );
        let outcome = execute_action(&action, &mut ctx)?;
        tracing::debug!("{actor} used {}: {outcome:?}", action.name());

        self.process_status(actor)
    }

    /// A sleeping combatant spends its turn trying to wake up.
    fn sleep_turn(&mut self, actor: CombatantId) -> Result<(), ArenaError> {
        self.events.push(BattleEvent::StatusActive {
            target: actor,
            condition: StatusCondition::Sleep,
        });
        if self
            .decisions
            .check(Decision::SleepEnd, self.config.wake_chance)
        {
            self.combatant_mut(actor)?
                .state_mut()
                .set_status(StatusCondition::None);
            self.events.push(BattleEvent::StatusEnded {
                target: actor,
                condition: StatusCondition::Sleep,
            });
        }
        Ok(())
    }

    /// End-of-turn processing of the actor's own condition.
    fn process_status(&mut self, actor: CombatantId) -> Result<(), ArenaError> {
        let state = self
            .roster
            .get(actor)
            .ok_or(ArenaError::UnknownCombatant(actor))?
            .state();
        let condition = state.status();
        if state.is_defeated() || !condition.wears_off_after_turn() {
            return Ok(());
        }

        self.events.push(BattleEvent::StatusActive {
            target: actor,
            condition,
        });

        if self
            .decisions
            .check(Decision::StatusEnd, self.config.status_recovery_chance)
        {
            self.combatant_mut(actor)?
                .state_mut()
                .set_status(StatusCondition::None);
            self.events.push(BattleEvent::StatusEnded {
                target: actor,
                condition,
            });
            return Ok(());
        }

        if condition == StatusCondition::Burn {
            let percent = self.config.burn_damage_percent;
            let state = self.combatant_mut(actor)?.state_mut();
            let amount = combat::relative_amount(state.max_hp(), percent);
            let lost = state.lose_health(amount);
            let fainted = state.is_defeated();
            if fainted {
                state.set_status(StatusCondition::Fainted);
            }

            self.events.push(BattleEvent::BurnDamage {
                target: actor,
                amount: lost,
            });
            if fainted {
                self.events.push(BattleEvent::Fainted { target: actor });
            }
        }
        Ok(())
    }

    /// Count every protection window down by one round.
    fn end_round(&mut self) {
        for (id, combatant) in self.roster.iter_mut() {
            if combatant.state_mut().decrease_protection_duration() {
                self.events.push(BattleEvent::ProtectionFaded { target: id });
            }
        }
    }

    /// `Some(winner)` once at most one combatant is conscious.
    pub(super) fn result(&self) -> Option<Option<CombatantId>> {
        let conscious = self.roster.conscious();
        match conscious.as_slice() {
            [] => Some(None),
            [winner] => Some(Some(*winner)),
            _ => None,
        }
    }
}

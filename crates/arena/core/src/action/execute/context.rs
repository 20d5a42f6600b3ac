//! Effect execution context.

use crate::action::effect::TargetSelector;
use crate::combat::Element;
use crate::combatant::{Combatant, CombatantId, Roster};
use crate::config::ArenaConfig;
use crate::decision::DecisionSource;
use crate::error::ArenaError;
use crate::event::BattleEvent;
use crate::stats::StatusCondition;

/// Everything an effect needs while it executes.
///
/// The context borrows the contest's roster, decision source and event log
/// for the duration of one action; nothing is global.
pub struct EffectContext<'a> {
    /// The combatant performing the action.
    pub actor: CombatantId,

    /// The target chosen for the action, if any.
    pub target: Option<CombatantId>,

    /// Element of the action being executed.
    pub element: Element,

    pub roster: &'a mut Roster,

    pub decisions: &'a mut dyn DecisionSource,

    /// Event sink.
    pub events: &'a mut Vec<BattleEvent>,

    pub config: &'a ArenaConfig,
}

impl<'a> EffectContext<'a> {
    pub fn new(
        actor: CombatantId,
        target: Option<CombatantId>,
        element: Element,
        roster: &'a mut Roster,
        decisions: &'a mut dyn DecisionSource,
        events: &'a mut Vec<BattleEvent>,
        config: &'a ArenaConfig,
    ) -> Self {
        Self {
            actor,
            target,
            element,
            roster,
            decisions,
            events,
            config,
        }
    }

    /// Map a selector to a concrete combatant.
    pub fn resolve(&self, selector: TargetSelector) -> Result<CombatantId, ArenaError> {
        match selector {
            TargetSelector::User => Ok(self.actor),
            TargetSelector::Opponent => self.target.ok_or(ArenaError::NoValidTarget),
        }
    }

    pub fn combatant(&self, id: CombatantId) -> Result<&Combatant, ArenaError> {
        self.roster.get(id).ok_or(ArenaError::UnknownCombatant(id))
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Result<&mut Combatant, ArenaError> {
        self.roster
            .get_mut(id)
            .ok_or(ArenaError::UnknownCombatant(id))
    }

    pub fn emit(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    /// Mark a freshly defeated combatant as fainted.
    pub fn faint_if_defeated(&mut self, id: CombatantId) -> Result<(), ArenaError> {
        let combatant = self.combatant_mut(id)?;
        if !combatant.is_defeated() || combatant.state().status() == StatusCondition::Fainted {
            return Ok(());
        }
        combatant.state_mut().set_status(StatusCondition::Fainted);
        self.emit(BattleEvent::Fainted { target: id });
        Ok(())
    }
}

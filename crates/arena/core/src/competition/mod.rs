//! Round orchestrator.
//!
//! A [`Competition`] owns the roster, the decision source and the event log.
//! It runs as a cooperative state machine:
//!
//! ```text
//! Setup ──start──▶ AwaitingAction(a) ──submit──▶ AwaitingAction(b) ──submit──▶ …
//!                        ▲                                              │
//!                        └──── next round ◀── execute round ◀───────────┘
//!                                                   │
//!                                                   ▼
//!                                          Decided(winner?)
//! ```
//!
//! Choices are collected in roster order, skipping defeated combatants. Once
//! every conscious combatant has chosen, the round executes in descending
//! effective SPD. The contest is decided as soon as at most one combatant is
//! conscious, checked at the start of every round and after every turn.

mod phase;
mod round;

pub use phase::{Choice, Phase};

use round::{PendingChoice, RoundEnd};

use crate::combatant::{Combatant, CombatantId, Roster};
use crate::config::ArenaConfig;
use crate::decision::{DecisionSource, SeededDecisions};
use crate::error::ArenaError;
use crate::event::BattleEvent;

/// One elimination contest.
#[derive(Debug)]
pub struct Competition<D: DecisionSource = SeededDecisions> {
    roster: Roster,
    decisions: D,
    config: ArenaConfig,
    phase: Phase,
    round: u32,
    choices: Vec<Option<PendingChoice>>,
    events: Vec<BattleEvent>,
}

impl Competition<SeededDecisions> {
    /// Contest whose random outcomes come from a seeded stream.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SeededDecisions::new(seed))
    }
}

impl<D: DecisionSource> Competition<D> {
    pub fn new(decisions: D) -> Self {
        Self {
            roster: Roster::new(),
            decisions,
            config: ArenaConfig::default(),
            phase: Phase::Setup,
            round: 0,
            choices: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Builder: replace the tunable chances.
    pub fn with_config(mut self, config: ArenaConfig) -> Self {
        self.config = config;
        self
    }

    // ===== roster =====

    /// Add a combatant before the contest starts.
    pub fn add_combatant(&mut self, combatant: Combatant) -> Result<CombatantId, ArenaError> {
        match self.phase {
            Phase::Setup => Ok(self.roster.add(combatant)),
            Phase::AwaitingAction { .. } => Err(ArenaError::AlreadyStarted),
            Phase::Decided { .. } => Err(ArenaError::AlreadyDecided),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.roster.get(id)
    }

    fn combatant_mut(&mut self, id: CombatantId) -> Result<&mut Combatant, ArenaError> {
        self.roster
            .get_mut(id)
            .ok_or(ArenaError::UnknownCombatant(id))
    }

    /// Look up a combatant by display name.
    pub fn find(&self, display_name: &str) -> Option<CombatantId> {
        self.roster.find(display_name)
    }

    // ===== state queries =====

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round, starting at 1. Zero before the first round.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_decided(&self) -> bool {
        self.phase.is_decided()
    }

    pub fn winner(&self) -> Option<CombatantId> {
        match self.phase {
            Phase::Decided { winner } => winner,
            _ => None,
        }
    }

    /// The combatant whose choice is awaited.
    pub fn current_actor(&self) -> Option<CombatantId> {
        self.phase.actor()
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn decisions(&self) -> &D {
        &self.decisions
    }

    pub fn decisions_mut(&mut self) -> &mut D {
        &mut self.decisions
    }

    /// Events not yet drained.
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    // ===== flow =====

    /// Begin the contest (or resume it after [`reset`](Self::reset)).
    pub fn start(&mut self) -> Result<Phase, ArenaError> {
        match self.phase {
            Phase::Setup => {}
            Phase::AwaitingAction { .. } => return Err(ArenaError::AlreadyStarted),
            Phase::Decided { .. } => return Err(ArenaError::AlreadyDecided),
        }
        if self.roster.is_empty() {
            return Err(ArenaError::EmptyRoster);
        }

        tracing::debug!("competition starts with {} monsters", self.roster.len());
        self.events.push(BattleEvent::ContestStarted {
            combatants: self.roster.iter().map(|(id, _)| id).collect(),
        });
        self.begin_round();
        Ok(self.phase)
    }

    /// Record the awaited combatant's choice and advance the contest.
    ///
    /// When this was the last choice of the round, the round executes before
    /// the call returns. The returned phase names the next combatant to choose
    /// or the result.
    pub fn submit(&mut self, choice: Choice) -> Result<Phase, ArenaError> {
        let actor = match self.phase {
            Phase::AwaitingAction { actor } => actor,
            Phase::Setup => return Err(ArenaError::NotStarted),
            Phase::Decided { .. } => return Err(ArenaError::AlreadyDecided),
        };

        let pending = self.validate(actor, choice)?;
        if let Some(slot) = self.choices.get_mut(actor.index()) {
            *slot = Some(pending);
        }

        match self.next_selector(actor.index() + 1) {
            Some(next) => self.await_choice(next),
            None => match self.execute_round()? {
                RoundEnd::Decided(winner) => self.decide(winner),
                RoundEnd::Continue => self.begin_round(),
            },
        }
        Ok(self.phase)
    }

    /// Shorthand for submitting [`Choice::Pass`].
    pub fn pass(&mut self) -> Result<Phase, ArenaError> {
        self.submit(Choice::Pass)
    }

    /// Restore every combatant and return to round 0, keeping the roster.
    pub fn reset(&mut self) {
        for (_, combatant) in self.roster.iter_mut() {
            combatant.state_mut().restore();
        }
        self.phase = Phase::Setup;
        self.round = 0;
        self.choices.clear();
        self.events.clear();
    }

    /// Remove every combatant.
    pub fn clear(&mut self) {
        self.reset();
        self.roster.clear();
    }

    // ===== internals =====

    fn validate(&self, actor: CombatantId, choice: Choice) -> Result<PendingChoice, ArenaError> {
        let (name, target) = match choice {
            Choice::Pass => return Ok(PendingChoice::Pass),
            Choice::Use { action, target } => (action, target),
        };

        let combatant = self
            .roster
            .get(actor)
            .ok_or(ArenaError::UnknownCombatant(actor))?;
        let action = combatant
            .action(&name)
            .cloned()
            .ok_or_else(|| ArenaError::UnknownAction {
                combatant: combatant.display_name().to_owned(),
                action: name,
            })?;

        let target = match target {
            Some(id) => {
                self.roster.get(id).ok_or(ArenaError::UnknownCombatant(id))?;
                Some(id)
            }
            None if action.requires_target() => Some(
                self.roster
                    .conscious()
                    .into_iter()
                    .find(|&id| id != actor)
                    .ok_or(ArenaError::NoValidTarget)?,
            ),
            None => None,
        };

        Ok(PendingChoice::Use { action, target })
    }

    /// First conscious combatant at or after roster position `from`.
    fn next_selector(&self, from: usize) -> Option<CombatantId> {
        self.roster
            .iter()
            .skip(from)
            .find(|(_, combatant)| !combatant.is_defeated())
            .map(|(id, _)| id)
    }

    fn begin_round(&mut self) {
        if let Some(winner) = self.result() {
            self.decide(winner);
            return;
        }

        self.round += 1;
        tracing::debug!(round = self.round, "round starts");
        self.events.push(BattleEvent::RoundStarted { round: self.round });
        self.choices = vec![None; self.roster.len()];

        match self.next_selector(0) {
            Some(actor) => self.await_choice(actor),
            None => self.decide(None),
        }
    }

    fn await_choice(&mut self, actor: CombatantId) {
        self.phase = Phase::AwaitingAction { actor };
        self.events.push(BattleEvent::AwaitingChoice { actor });
    }

    fn decide(&mut self, winner: Option<CombatantId>) {
        tracing::debug!(round = self.round, ?winner, "competition decided");
        self.phase = Phase::Decided { winner };
        self.events.push(match winner {
            Some(winner) => BattleEvent::Won { winner },
            None => BattleEvent::Draw,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::action::{Action, Amount, DamageEffect, TargetSelector};
    use crate::combat::Element;
    use crate::decision::ScriptedDecisions;
    use crate::stats::BaseStats;

    fn tackle() -> Arc<Action> {
        Arc::new(Action::new(
            "Tackle",
            Element::Normal,
            vec![DamageEffect::new(TargetSelector::Opponent, Amount::Absolute(10), 100).into()],
        ))
    }

    fn monster(name: &str, spd: u32) -> Combatant {
        Combatant::new(
            name,
            Element::Normal,
            BaseStats::new(30, 10, 10, spd),
            vec![tackle()],
        )
    }

    fn duel() -> Competition<ScriptedDecisions> {
        let mut competition = Competition::new(ScriptedDecisions::new());
        competition.add_combatant(monster("Slow", 5)).unwrap();
        competition.add_combatant(monster("Fast", 20)).unwrap();
        competition
    }

    #[test]
    fn selection_follows_roster_order() {
        let mut competition = duel();
        assert_eq!(
            competition.start().unwrap(),
            Phase::AwaitingAction {
                actor: CombatantId(0)
            }
        );
        assert_eq!(
            competition.pass().unwrap(),
            Phase::AwaitingAction {
                actor: CombatantId(1)
            }
        );
    }

    #[test]
    fn execution_follows_speed() {
        let mut competition = duel();
        competition.start().unwrap();
        competition.submit(Choice::action("Tackle")).unwrap();
        competition.submit(Choice::action("Tackle")).unwrap();

        let turns: Vec<_> = competition
            .drain_events()
            .into_iter()
            .filter_map(|event| match event {
                BattleEvent::TurnStarted { actor } => Some(actor),
                _ => None,
            })
            .collect();
        assert_eq!(turns, vec![CombatantId(1), CombatantId(0)]);
        assert_eq!(competition.round(), 2);
    }

    #[test]
    fn unknown_action_is_rejected_and_phase_kept() {
        let mut competition = duel();
        competition.start().unwrap();
        let error = competition.submit(Choice::action("Splash")).unwrap_err();
        assert_eq!(
            error,
            ArenaError::UnknownAction {
                combatant: "Slow".into(),
                action: "Splash".into()
            }
        );
        assert_eq!(competition.current_actor(), Some(CombatantId(0)));
    }

    #[test]
    fn lifecycle_errors() {
        let mut competition = duel();
        assert_eq!(competition.pass(), Err(ArenaError::NotStarted));
        competition.start().unwrap();
        assert_eq!(competition.start(), Err(ArenaError::AlreadyStarted));

        let mut empty = Competition::with_seed(1);
        assert_eq!(empty.start(), Err(ArenaError::EmptyRoster));
    }

    #[test]
    fn duel_runs_to_a_winner() {
        let mut competition = duel();
        competition.start().unwrap();
        while !competition.is_decided() {
            competition.submit(Choice::action("Tackle")).unwrap();
        }
        // Fast acts first each round and lands the third hit.
        assert_eq!(competition.winner(), Some(CombatantId(1)));
        assert_eq!(competition.round(), 3);
        assert_eq!(
            competition.submit(Choice::Pass),
            Err(ArenaError::AlreadyDecided)
        );
    }

    #[test]
    fn reset_restores_and_returns_to_setup() {
        let mut competition = duel();
        competition.start().unwrap();
        competition.submit(Choice::action("Tackle")).unwrap();
        competition.submit(Choice::action("Tackle")).unwrap();

        competition.reset();
        assert_eq!(competition.phase(), Phase::Setup);
        assert_eq!(competition.round(), 0);
        assert!(
            competition
                .roster()
                .iter()
                .all(|(_, c)| c.state().hp() == c.state().max_hp())
        );
        assert_eq!(competition.roster().len(), 2);

        competition.clear();
        assert!(competition.roster().is_empty());
    }
}

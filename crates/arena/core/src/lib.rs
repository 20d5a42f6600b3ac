//! Deterministic battle rules for the monster arena.
//!
//! `arena-core` defines the canonical rules (stats, status conditions, effects,
//! the round state machine) and exposes pure APIs that the content loaders and
//! the command front end build on. All contest state mutation flows through
//! [`competition::Competition`], and every random decision is drawn from a
//! [`decision::DecisionSource`] so a fixed seed replays an identical contest.
pub mod action;
pub mod combat;
pub mod combatant;
pub mod competition;
pub mod config;
pub mod decision;
pub mod error;
pub mod event;
pub mod stats;

pub use action::{
    Action, ActionOutcome, Amount, ContinueEffect, Count, DamageEffect, Effect, EffectContext,
    EffectOutcome, HealEffect, InflictStatusEffect, ProtectEffect, RepeatEffect, StatChangeEffect,
    TargetSelector,
};
pub use combat::{Effectiveness, Element};
pub use combatant::{Combatant, CombatantId, CombatantState, Guard, ProtectionWindow, Roster};
pub use competition::{Choice, Competition, Phase};
pub use config::ArenaConfig;
pub use decision::{Decision, DecisionSource, Query, ScriptedDecisions, SeededDecisions};
pub use error::{ArenaError, ErrorSeverity, GameError};
pub use event::BattleEvent;
pub use stats::{BaseStats, Stat, StatStages, StatusCondition};

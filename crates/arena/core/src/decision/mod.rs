//! Decision sources for every random outcome of a contest.
//!
//! This module provides a trait-based decision system that keeps contests
//! reproducible: hit rolls, critical rolls, damage variance, repeat counts
//! and recovery rolls are all drawn from one [`DecisionSource`], queried in a
//! fixed order.
//!
//! # Implementations
//!
//! - [`SeededDecisions`]: PCG stream seeded once per contest
//! - [`ScriptedDecisions`]: answers supplied up front, for debugging and tests
//!
//! # Query Order
//!
//! Per effect: hit roll, then (BASE damage only) critical roll, then the
//! random damage factor. Substituting one source for another never changes
//! the order of queries.

mod scripted;
mod seeded;

pub use scripted::{Query, ScriptedDecisions};
pub use seeded::SeededDecisions;

/// Named yes/no decisions a contest asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Whether an effect hits.
    EffectHit,
    /// Whether BASE damage is a critical hit.
    CriticalHit,
    /// Whether a sleeping combatant wakes up.
    SleepEnd,
    /// Whether a status condition ends after the combatant's turn.
    StatusEnd,
}

impl Decision {
    /// Returns a human-readable description used by manual prompts.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EffectHit => "effect hit",
            Self::CriticalHit => "critical hit",
            Self::SleepEnd => "sleep end",
            Self::StatusEnd => "status condition end",
        }
    }
}

/// Source of every random outcome in a contest.
///
/// Implementations must be deterministic for a given configuration: the same
/// sequence of queries yields the same answers.
pub trait DecisionSource {
    /// Decide a yes/no question that succeeds with `probability` percent.
    ///
    /// Probabilities above 100 always succeed.
    fn check(&mut self, decision: Decision, probability: f64) -> bool;

    /// Draw a real factor from `[min, max]`.
    fn factor(&mut self, min: f64, max: f64) -> f64;

    /// Draw a count from `[min, max]` inclusive.
    fn count(&mut self, min: u32, max: u32) -> u32;
}

impl<T: DecisionSource + ?Sized> DecisionSource for &mut T {
    fn check(&mut self, decision: Decision, probability: f64) -> bool {
        (**self).check(decision, probability)
    }

    fn factor(&mut self, min: f64, max: f64) -> f64 {
        (**self).factor(min, max)
    }

    fn count(&mut self, min: u32, max: u32) -> u32 {
        (**self).count(min, max)
    }
}

impl<T: DecisionSource + ?Sized> DecisionSource for Box<T> {
    fn check(&mut self, decision: Decision, probability: f64) -> bool {
        (**self).check(decision, probability)
    }

    fn factor(&mut self, min: f64, max: f64) -> f64 {
        (**self).factor(min, max)
    }

    fn count(&mut self, min: u32, max: u32) -> u32 {
        (**self).count(min, max)
    }
}

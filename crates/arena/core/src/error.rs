//! Common error infrastructure for arena-core.
//!
//! This module provides the shared severity classification and the
//! [`ArenaError`] type returned by every fallible engine operation.
//!
//! Gameplay failures (a missed hit, a blocked status condition, a suppressed
//! stat decrease) are never errors: they surface as
//! [`BattleEvent`](crate::event::BattleEvent)s. Errors here are invariant
//! violations that abort the operation that triggered them.

use crate::combatant::CombatantId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can retry with different input
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: a construction bug or state inconsistency
/// - **Fatal**: the contest cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    ///
    /// Examples: action unknown to the combatant, no target available
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: combatant not found, contest not started
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: repeat block left in a flattened queue
    Internal,

    /// Fatal error - contest state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by the battle engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    /// An operation needs a running contest but `start` was never called.
    #[error("the competition has not started")]
    NotStarted,

    /// `start` was called on a contest that is already running.
    #[error("the competition is already running")]
    AlreadyStarted,

    /// The contest already has a result.
    #[error("the competition is already over")]
    AlreadyDecided,

    /// A combatant id does not belong to the roster.
    #[error("unknown monster {0}")]
    UnknownCombatant(CombatantId),

    /// The acting combatant does not know the requested action.
    #[error("{combatant} does not know the action {action}")]
    UnknownAction { combatant: String, action: String },

    /// The action needs an opponent but none is conscious.
    #[error("there is no valid target")]
    NoValidTarget,

    /// A contest cannot start without combatants.
    #[error("no monsters are taking part")]
    EmptyRoster,

    /// A repeat block survived queue expansion.
    #[error("repeat effect left in an expanded effect queue")]
    UnexpandedRepeat,
}

impl GameError for ArenaError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownAction { .. } | Self::NoValidTarget => ErrorSeverity::Recoverable,
            Self::NotStarted
            | Self::AlreadyStarted
            | Self::AlreadyDecided
            | Self::UnknownCombatant(_)
            | Self::EmptyRoster => ErrorSeverity::Validation,
            Self::UnexpandedRepeat => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotStarted => "ARENA_NOT_STARTED",
            Self::AlreadyStarted => "ARENA_ALREADY_STARTED",
            Self::AlreadyDecided => "ARENA_ALREADY_DECIDED",
            Self::UnknownCombatant(_) => "ARENA_UNKNOWN_COMBATANT",
            Self::UnknownAction { .. } => "ARENA_UNKNOWN_ACTION",
            Self::NoValidTarget => "ARENA_NO_VALID_TARGET",
            Self::EmptyRoster => "ARENA_EMPTY_ROSTER",
            Self::UnexpandedRepeat => "ARENA_UNEXPANDED_REPEAT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_mistakes_are_recoverable() {
        let error = ArenaError::UnknownAction {
            combatant: "Rex".into(),
            action: "Splash".into(),
        };
        assert!(error.severity().is_recoverable());
        assert_eq!(error.to_string(), "Rex does not know the action Splash");
    }

    #[test]
    fn lifecycle_errors_are_validation_failures() {
        for error in [
            ArenaError::NotStarted,
            ArenaError::AlreadyStarted,
            ArenaError::AlreadyDecided,
            ArenaError::EmptyRoster,
        ] {
            assert_eq!(error.severity(), ErrorSeverity::Validation);
            assert!(error.error_code().starts_with("ARENA_"));
        }
    }

    #[test]
    fn unexpanded_repeat_is_internal() {
        assert!(ArenaError::UnexpandedRepeat.severity().is_internal());
        assert_eq!(
            ArenaError::UnexpandedRepeat.error_code(),
            "ARENA_UNEXPANDED_REPEAT"
        );
    }
}

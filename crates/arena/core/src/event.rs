//! Structured contest events.
//!
//! The engine never formats text. Every observable step of a contest is
//! appended to the competition's event log as a [`BattleEvent`] and drained by
//! the front end, which owns the wording.

use crate::combat::Effectiveness;
use crate::combatant::{CombatantId, Guard};
use crate::stats::{Stat, StatusCondition};

/// Something that happened during a contest, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    // ===== contest flow =====
    ContestStarted { combatants: Vec<CombatantId> },
    RoundStarted { round: u32 },
    AwaitingChoice { actor: CombatantId },
    TurnStarted { actor: CombatantId },
    Passed { actor: CombatantId },
    ActionUsed { actor: CombatantId, action: String },
    /// The first effect of an action missed; the rest was discarded.
    ActionFailed { actor: CombatantId },

    // ===== health =====
    Damaged { target: CombatantId, amount: u32 },
    BurnDamage { target: CombatantId, amount: u32 },
    /// Damage absorbed by health protection.
    DamageBlocked { target: CombatantId },
    Effectiveness { effectiveness: Effectiveness },
    CriticalHit,
    Healed { target: CombatantId, amount: u32 },

    // ===== stats and conditions =====
    StatRaised { target: CombatantId, stat: Stat },
    StatLowered { target: CombatantId, stat: Stat },
    /// A stat decrease absorbed by stat protection.
    StatChangeBlocked { target: CombatantId },
    StatusInflicted { target: CombatantId, condition: StatusCondition },
    StatusActive { target: CombatantId, condition: StatusCondition },
    StatusEnded { target: CombatantId, condition: StatusCondition },
    Protected { target: CombatantId, guard: Guard },
    ProtectionFaded { target: CombatantId },
    Fainted { target: CombatantId },

    // ===== result =====
    Won { winner: CombatantId },
    Draw,
}

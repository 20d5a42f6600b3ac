use crate::combatant::CombatantId;

/// Where a contest stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Roster is being assembled; `start` has not been called.
    #[default]
    Setup,
    /// The contest is suspended until `actor`'s choice is submitted.
    AwaitingAction { actor: CombatantId },
    /// The contest is over. `None` means every combatant fell.
    Decided { winner: Option<CombatantId> },
}

impl Phase {
    pub const fn is_decided(self) -> bool {
        matches!(self, Self::Decided { .. })
    }

    pub const fn actor(self) -> Option<CombatantId> {
        match self {
            Self::AwaitingAction { actor } => Some(actor),
            _ => None,
        }
    }
}

/// A combatant's choice for the current round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Choice {
    /// Skip the turn.
    Pass,
    /// Use a known action. Without an explicit target the first conscious
    /// opponent in roster order is chosen when the action needs one.
    Use {
        action: String,
        target: Option<CombatantId>,
    },
}

impl Choice {
    pub fn action(name: impl Into<String>) -> Self {
        Self::Use {
            action: name.into(),
            target: None,
        }
    }

    pub fn action_on(name: impl Into<String>, target: CombatantId) -> Self {
        Self::Use {
            action: name.into(),
            target: Some(target),
        }
    }
}

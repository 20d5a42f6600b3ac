//! Combatants and the contest roster.
//!
//! A [`Combatant`] couples immutable identity (name, element, known actions)
//! with its mutable [`CombatantState`]. Actions are shared between every
//! combatant spawned from the same template via `Arc`.

mod protection;
mod roster;
mod state;

pub use protection::{Guard, ProtectionWindow};
pub use roster::Roster;
pub use state::CombatantState;

use std::fmt;
use std::sync::Arc;

use crate::action::Action;
use crate::combat::Element;
use crate::stats::{BaseStats, Stat};

/// Position of a combatant in the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl CombatantId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A monster taking part in a contest.
#[derive(Clone, Debug)]
pub struct Combatant {
    name: String,
    display_name: String,
    element: Element,
    actions: Vec<Arc<Action>>,
    state: CombatantState,
}

impl Combatant {
    /// Build a combatant at full health. The display name starts out equal
    /// to the name; the roster disambiguates it on insertion.
    pub fn new(
        name: impl Into<String>,
        element: Element,
        base: BaseStats,
        actions: Vec<Arc<Action>>,
    ) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            element,
            actions,
            state: CombatantState::new(base),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unique name within the roster (`Rex`, `Rex#1`, ...).
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub(crate) fn set_display_name(&mut self, display_name: String) {
        self.display_name = display_name;
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn actions(&self) -> &[Arc<Action>] {
        &self.actions
    }

    /// Look up a known action by name.
    pub fn action(&self, name: &str) -> Option<&Arc<Action>> {
        self.actions.iter().find(|action| action.name() == name)
    }

    pub fn state(&self) -> &CombatantState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CombatantState {
        &mut self.state
    }

    pub fn is_defeated(&self) -> bool {
        self.state.is_defeated()
    }

    pub fn effective_stat(&self, stat: Stat) -> f64 {
        self.state.effective_stat(stat)
    }
}

//! Action and monster template registry.

use std::collections::HashMap;
use std::sync::Arc;

use arena_core::{Action, BaseStats, Combatant, Element};

/// Errors raised while assembling a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("action {0} is defined twice; names cannot be redefined")]
    DuplicateAction(String),

    #[error("monster {0} is defined twice; names cannot be redefined")]
    DuplicateMonster(String),

    #[error("monster {monster} refers to unknown action {action}")]
    UnknownAction { monster: String, action: String },
}

/// Blueprint of a monster; every spawn starts from full health.
#[derive(Clone, Debug)]
pub struct MonsterTemplate {
    pub name: String,
    pub element: Element,
    pub stats: BaseStats,
    pub actions: Vec<Arc<Action>>,
}

impl MonsterTemplate {
    pub fn spawn(&self) -> Combatant {
        Combatant::new(
            self.name.clone(),
            self.element,
            self.stats,
            self.actions.clone(),
        )
    }
}

/// Loaded actions and monster templates, in definition order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    actions: Vec<Arc<Action>>,
    action_index: HashMap<String, usize>,
    monsters: Vec<MonsterTemplate>,
    monster_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action under its name.
    pub fn add_action(&mut self, action: Action) -> Result<Arc<Action>, CatalogError> {
        if self.action_index.contains_key(action.name()) {
            return Err(CatalogError::DuplicateAction(action.name().to_owned()));
        }
        let action = Arc::new(action);
        self.action_index
            .insert(action.name().to_owned(), self.actions.len());
        self.actions.push(Arc::clone(&action));
        Ok(action)
    }

    /// Register a monster template. Every action name must already be known.
    pub fn add_monster<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        element: Element,
        stats: BaseStats,
        action_names: &[S],
    ) -> Result<&MonsterTemplate, CatalogError> {
        let name = name.into();
        if self.monster_index.contains_key(&name) {
            return Err(CatalogError::DuplicateMonster(name));
        }

        let actions = action_names
            .iter()
            .map(|action| {
                self.action(action.as_ref())
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownAction {
                        monster: name.clone(),
                        action: action.as_ref().to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let index = self.monsters.len();
        self.monster_index.insert(name.clone(), index);
        self.monsters.push(MonsterTemplate {
            name,
            element,
            stats,
            actions,
        });
        Ok(&self.monsters[index])
    }

    pub fn action(&self, name: &str) -> Option<&Arc<Action>> {
        self.action_index.get(name).map(|&index| &self.actions[index])
    }

    pub fn actions(&self) -> &[Arc<Action>] {
        &self.actions
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn monster(&self, name: &str) -> Option<&MonsterTemplate> {
        self.monster_index
            .get(name)
            .map(|&index| &self.monsters[index])
    }

    pub fn monsters(&self) -> &[MonsterTemplate] {
        &self.monsters
    }

    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }

    /// Fresh combatant from the named template.
    pub fn spawn(&self, name: &str) -> Option<Combatant> {
        self.monster(name).map(MonsterTemplate::spawn)
    }
}

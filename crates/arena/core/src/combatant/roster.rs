use std::collections::HashMap;

use super::{Combatant, CombatantId};

/// Insertion-ordered set of combatants with unique display names.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    combatants: Vec<Combatant>,
    by_display_name: HashMap<String, CombatantId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a combatant, assigning it a unique display name.
    ///
    /// The first combatant of a name keeps it; later ones get `name#1`,
    /// `name#2` and so on.
    pub fn add(&mut self, mut combatant: Combatant) -> CombatantId {
        let display_name = self.unique_name(combatant.name());
        combatant.set_display_name(display_name.clone());

        let id = CombatantId(self.combatants.len() as u32);
        self.by_display_name.insert(display_name, id);
        self.combatants.push(combatant);
        id
    }

    fn unique_name(&self, name: &str) -> String {
        if !self.by_display_name.contains_key(name) {
            return name.to_owned();
        }
        (1u32..)
            .map(|suffix| format!("{name}#{suffix}"))
            .find(|candidate| !self.by_display_name.contains_key(candidate))
            .unwrap_or_else(|| name.to_owned())
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(id.index())
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.get_mut(id.index())
    }

    /// Look up a combatant by display name.
    pub fn find(&self, display_name: &str) -> Option<CombatantId> {
        self.by_display_name.get(display_name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CombatantId, &Combatant)> {
        self.combatants
            .iter()
            .enumerate()
            .map(|(index, combatant)| (CombatantId(index as u32), combatant))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CombatantId, &mut Combatant)> {
        self.combatants
            .iter_mut()
            .enumerate()
            .map(|(index, combatant)| (CombatantId(index as u32), combatant))
    }

    /// Ids of every combatant that is not defeated, in roster order.
    pub fn conscious(&self) -> Vec<CombatantId> {
        self.iter()
            .filter(|(_, combatant)| !combatant.is_defeated())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn clear(&mut self) {
        self.combatants.clear();
        self.by_display_name.clear();
    }
}

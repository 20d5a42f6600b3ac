//! Mutable combat state of one combatant.

use super::protection::{Guard, ProtectionWindow};
use crate::stats::{self, BaseStats, Stat, StatStages, StatusCondition};

/// Everything about a combatant that changes during a contest.
///
/// Health stays within `[0, max_hp]`, stages within the configured bounds,
/// and the combatant carries at most one status condition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    base: BaseStats,
    hp: u32,
    stages: StatStages,
    status: StatusCondition,
    protection: ProtectionWindow,
}

impl CombatantState {
    /// Fresh state at full health.
    pub fn new(base: BaseStats) -> Self {
        Self {
            hp: base.hp,
            base,
            stages: StatStages::new(),
            status: StatusCondition::None,
            protection: ProtectionWindow::default(),
        }
    }

    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.base.hp
    }

    pub fn stages(&self) -> &StatStages {
        &self.stages
    }

    pub fn status(&self) -> StatusCondition {
        self.status
    }

    pub fn protection(&self) -> &ProtectionWindow {
        &self.protection
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Damage from an opponent. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        if self.protection.guards_health() {
            return 0;
        }
        self.lose_health(amount)
    }

    /// Health loss that ignores protection (self-inflicted damage, burning).
    pub fn lose_health(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Returns the health actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_hp().saturating_sub(self.hp));
        self.hp += gained;
        gained
    }

    pub fn set_status(&mut self, condition: StatusCondition) {
        self.status = condition;
    }

    /// Apply a stage delta, clamped. Returns the new stage.
    pub fn change_stat_stage(&mut self, stat: Stat, delta: i32) -> i32 {
        self.stages.change(stat, delta)
    }

    /// Replace the protection window.
    pub fn set_protection(&mut self, health: bool, stats: bool, duration: u32) {
        let mut guards = Guard::empty();
        guards.set(Guard::HEALTH, health);
        guards.set(Guard::STATS, stats);
        self.protection = ProtectionWindow::new(guards, duration);
    }

    /// Count protection down by one round; true when it just faded.
    pub fn decrease_protection_duration(&mut self) -> bool {
        self.protection.decrease()
    }

    /// Back to full health, neutral stages, no condition and no protection.
    pub fn restore(&mut self) {
        *self = Self::new(self.base);
    }

    pub fn effective_stat(&self, stat: Stat) -> f64 {
        stats::effective_stat(&self.base, &self.stages, self.status, stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> CombatantState {
        CombatantState::new(BaseStats::new(50, 10, 10, 10))
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut state = state();
        assert_eq!(state.take_damage(20), 20);
        assert_eq!(state.hp(), 30);
        assert_eq!(state.take_damage(100), 30);
        assert_eq!(state.hp(), 0);
        assert!(state.is_defeated());
    }

    #[test]
    fn health_protection_blocks_damage_but_not_health_loss() {
        let mut state = state();
        state.set_protection(true, false, 2);
        assert_eq!(state.take_damage(20), 0);
        assert_eq!(state.hp(), 50);
        assert_eq!(state.lose_health(20), 20);
        assert_eq!(state.hp(), 30);
    }

    #[test]
    fn heal_caps_at_max() {
        let mut state = state();
        state.lose_health(10);
        assert_eq!(state.heal(25), 10);
        assert_eq!(state.hp(), 50);
        assert_eq!(state.heal(5), 0);
    }

    #[test]
    fn heal_tolerates_health_above_max() {
        let mut state = CombatantState {
            hp: 60,
            ..state()
        };
        assert_eq!(state.heal(10), 0);
        assert_eq!(state.hp(), 60);
    }

    #[test]
    fn stages_clamp() {
        let mut state = state();
        assert_eq!(state.change_stat_stage(Stat::Atk, 4), 4);
        assert_eq!(state.change_stat_stage(Stat::Atk, 4), 5);
        assert_eq!(state.change_stat_stage(Stat::Def, -9), -5);
    }

    #[test]
    fn protection_counts_down_and_fades() {
        let mut state = state();
        state.set_protection(true, false, 2);
        assert!(!state.decrease_protection_duration());
        assert!(state.decrease_protection_duration());
        assert!(!state.protection().guards_health());
        assert!(!state.decrease_protection_duration());
    }

    #[test]
    fn restore_resets_everything() {
        let mut state = state();
        state.lose_health(40);
        state.change_stat_stage(Stat::Spd, -2);
        state.set_status(StatusCondition::Burn);
        state.set_protection(false, true, 3);

        state.restore();

        assert_eq!(state, CombatantState::new(BaseStats::new(50, 10, 10, 10)));
    }
}

//! Read-only status displays.
use arena_content::MonsterTemplate;
use arena_core::{Combatant, CombatantId, Roster, Stat};

use super::narrative::status_text;

const HEALTH_BAR_CELLS: u32 = 20;

/// `[XXXXXXXXXX__________]`, one cell per twentieth of max HP, rounded.
pub fn health_bar(hp: u32, max_hp: u32) -> String {
    let filled = if max_hp == 0 {
        0
    } else {
        let ratio = f64::from(HEALTH_BAR_CELLS) * f64::from(hp) / f64::from(max_hp);
        (ratio.round() as u32).min(HEALTH_BAR_CELLS)
    };
    format!(
        "[{}{}]",
        "X".repeat(filled as usize),
        "_".repeat((HEALTH_BAR_CELLS - filled) as usize)
    )
}

/// One row per combatant: bar, roster number, `*` for the actor, status.
pub fn roster_table(roster: &Roster, current: Option<CombatantId>) -> Vec<String> {
    roster
        .iter()
        .map(|(id, combatant)| {
            let state = combatant.state();
            let marker = if Some(id) == current { "*" } else { "" };
            format!(
                "{} {} {}{} {}",
                health_bar(state.hp(), state.max_hp()),
                id.index() + 1,
                marker,
                combatant.display_name(),
                status_text(state.status(), combatant.is_defeated())
            )
        })
        .collect()
}

/// `HP 40/50, ATK 12(+1), DEF 9, ...` for the given combatant.
pub fn stat_line(combatant: &Combatant) -> String {
    let state = combatant.state();
    let mut parts = vec![format!("HP {}/{}", state.hp(), state.max_hp())];
    for stat in Stat::STAGED {
        let base = state.base().get(stat);
        match state.stages().get(stat) {
            0 => parts.push(format!("{stat} {base}")),
            stage => parts.push(format!("{stat} {base}({stage:+})")),
        }
    }
    parts.join(", ")
}

/// `Name: ELEMENT FIRE, Damage b30, HitRate 95` for each known action.
pub fn action_table(combatant: &Combatant) -> Vec<String> {
    combatant
        .actions()
        .iter()
        .map(|action| {
            format!(
                "{}: ELEMENT {}, Damage {}, HitRate {}",
                action.name(),
                action.element(),
                action.damage_summary(),
                action.first_hit_rate().unwrap_or(0)
            )
        })
        .collect()
}

/// `Name: Element WATER, HP 90, ATK 14, DEF 12, SPD 16`.
pub fn monster_line(template: &MonsterTemplate) -> String {
    let stats = &template.stats;
    format!(
        "{}: Element {}, HP {}, ATK {}, DEF {}, SPD {}",
        template.name, template.element, stats.hp, stats.atk, stats.def, stats.spd
    )
}

//! Narrative lines for battle events.
use arena_core::{BattleEvent, CombatantId, Effectiveness, Guard, Roster, StatusCondition};

/// Render one event as zero or more output lines.
///
/// Events without a visible message (round boundaries, neutral effectiveness)
/// render as nothing.
pub fn narrate(event: &BattleEvent, roster: &Roster) -> Vec<String> {
    let name = |id: CombatantId| {
        roster
            .get(id)
            .map(|combatant| combatant.display_name().to_owned())
            .unwrap_or_else(|| id.to_string())
    };

    let line = match event {
        BattleEvent::ContestStarted { combatants } => {
            format!("The {} monsters enter the competition!", combatants.len())
        }
        BattleEvent::RoundStarted { .. } => return Vec::new(),
        BattleEvent::AwaitingChoice { actor } => {
            return vec![String::new(), format!("What should {} do?", name(*actor))];
        }
        BattleEvent::TurnStarted { actor } => {
            return vec![String::new(), format!("It's {}'s turn.", name(*actor))];
        }
        BattleEvent::Passed { actor } => format!("{} passes!", name(*actor)),
        BattleEvent::ActionUsed { actor, action } => format!("{} uses {}!", name(*actor), action),
        BattleEvent::ActionFailed { .. } => "The action failed...".to_owned(),

        BattleEvent::Damaged { target, amount } => {
            format!("{} takes {} damage!", name(*target), amount)
        }
        BattleEvent::BurnDamage { target, amount } => {
            format!("{} takes {} damage from burning!", name(*target), amount)
        }
        BattleEvent::DamageBlocked { target } => {
            format!("{} is protected and takes no damage!", name(*target))
        }
        BattleEvent::Effectiveness { effectiveness } => match effectiveness {
            Effectiveness::Super => "It is very effective!".to_owned(),
            Effectiveness::Weak => "It is not very effective...".to_owned(),
            Effectiveness::Neutral => return Vec::new(),
        },
        BattleEvent::CriticalHit => "Critical hit!".to_owned(),
        BattleEvent::Healed { target, amount } => {
            format!("{} gains back {} health!", name(*target), amount)
        }

        BattleEvent::StatRaised { target, stat } => format!("{}'s {} rises!", name(*target), stat),
        BattleEvent::StatLowered { target, stat } => {
            format!("{}'s {} decreases...", name(*target), stat)
        }
        BattleEvent::StatChangeBlocked { target } => {
            format!("{} is protected and is unaffected!", name(*target))
        }
        BattleEvent::StatusInflicted { target, condition } => {
            return condition_line(name(*target), condition.inflicted_message());
        }
        BattleEvent::StatusActive { target, condition } => {
            return condition_line(name(*target), condition.active_message());
        }
        BattleEvent::StatusEnded { target, condition } => {
            return condition_line(name(*target), condition.end_message());
        }
        BattleEvent::Protected { target, guard } => {
            let against = if guard.contains(Guard::HEALTH) {
                "damage"
            } else {
                "status changes"
            };
            format!("{} is now protected against {}!", name(*target), against)
        }
        BattleEvent::ProtectionFaded { target } => {
            format!("{}'s protection fades away...", name(*target))
        }
        BattleEvent::Fainted { target } => format!("{} faints!", name(*target)),

        BattleEvent::Won { winner } => {
            return vec![
                String::new(),
                format!(
                    "{} has no opponents left and wins the competition!",
                    name(*winner)
                ),
            ];
        }
        BattleEvent::Draw => {
            return vec![
                String::new(),
                "All monsters have fainted. The competition ends without a winner!".to_owned(),
            ];
        }
    };
    vec![line]
}

fn condition_line(name: String, message: Option<&'static str>) -> Vec<String> {
    message
        .map(|suffix| vec![format!("{name}{suffix}")])
        .unwrap_or_default()
}

/// Text shown next to a combatant in the roster table.
pub fn status_text(condition: StatusCondition, defeated: bool) -> String {
    if defeated {
        StatusCondition::Fainted.to_string()
    } else {
        format!("({condition})")
    }
}
